use alloc::vec::Vec;

use crate::wrap::{position_of, wrap};
use crate::{Direction, PanelOffset, Viewport};

/// The panel used as positional reference for a layout, and the slot it is placed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Anchor {
    pub first_visible: usize,
    pub first_visible_index: usize,
}

impl Default for Anchor {
    fn default() -> Self {
        Self {
            first_visible: 0,
            first_visible_index: 1,
        }
    }
}

/// Maps a logical index onto one physical offset per panel.
///
/// Panels form a strip of `count` slots. The anchor panel (the one at the display index) sits
/// at offset `0`; the remaining slots are split around it so that the seam where the strip wraps
/// is always on the side opposite to the direction of travel. A panel that crosses the seam
/// between two layouts is flagged `immediate` so it teleports instead of sweeping across the
/// viewport.
#[derive(Clone, Debug)]
pub struct PositionEngine {
    count: usize,
    prev: Anchor,
    offsets: Vec<PanelOffset>,
}

impl PositionEngine {
    pub fn new(count: usize) -> Self {
        debug_assert!(count > 0, "PositionEngine: count must be positive");
        Self {
            count,
            prev: Anchor::default(),
            offsets: Vec::with_capacity(count),
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// The anchor of the most recent layout (the "previous" anchor for the next one).
    pub fn anchor(&self) -> Anchor {
        self.prev
    }

    /// Offsets produced by the most recent layout.
    pub fn offsets(&self) -> &[PanelOffset] {
        &self.offsets
    }

    /// Slot index the anchor panel is placed in for a given direction.
    pub fn first_visible_index(&self, direction: Direction, visible_count: usize) -> usize {
        let n = self.count as i64;
        match direction {
            Direction::Backward => wrap(n - visible_count as i64 - 1, self.count),
            Direction::Forward => wrap(1, self.count),
        }
    }

    /// Computes offsets for `logical`, flagging panels that wrap around as immediate.
    ///
    /// `drag_carry` is added to every offset; it is the live drag movement while the pointer is
    /// still down and `0.0` otherwise.
    pub fn layout(
        &mut self,
        logical: i64,
        viewport: Viewport,
        direction: Direction,
        drag_carry: f64,
    ) -> &[PanelOffset] {
        self.compute(logical, viewport, direction, drag_carry, false)
    }

    /// Same as [`Self::layout`], but every panel is flagged immediate.
    pub fn layout_immediate(
        &mut self,
        logical: i64,
        viewport: Viewport,
        direction: Direction,
    ) -> &[PanelOffset] {
        self.compute(logical, viewport, direction, 0.0, true)
    }

    fn compute(
        &mut self,
        logical: i64,
        viewport: Viewport,
        direction: Direction,
        drag_carry: f64,
        force_immediate: bool,
    ) -> &[PanelOffset] {
        let n = self.count;
        let n_i = n as i64;
        let width = viewport.width;
        let final_y = logical as f64 * width;

        // floor(final_y / width) is the logical index itself; stay in integers.
        let first_visible = wrap(logical, n);
        let first_visible_index = self.first_visible_index(direction, viewport.visible_count);
        let behind = final_y < 0.0;

        // Truncating remainder: the rank corrections below assume the sign of `-final_y`.
        let base = -final_y % (width * n as f64);

        let prev = self.prev;
        self.offsets.clear();
        for i in 0..n {
            let position = position_of(i, first_visible, first_visible_index, n);
            let prev_position = position_of(i, prev.first_visible, prev.first_visible_index, n);

            let mut rank = first_visible as i64 + position as i64 - first_visible_index as i64;
            if behind {
                rank -= n_i;
                if first_visible == 0 {
                    rank += n_i;
                }
            }

            let wrapped = match direction {
                Direction::Forward => prev_position < position,
                Direction::Backward => prev_position > position,
            };

            self.offsets.push(PanelOffset {
                target: base + width * rank as f64 + drag_carry,
                immediate: force_immediate || wrapped,
            });
        }

        ctrace!(
            logical,
            first_visible,
            first_visible_index,
            width,
            drag_carry,
            "PositionEngine::layout"
        );

        self.prev = Anchor {
            first_visible,
            first_visible_index,
        };
        &self.offsets
    }
}
