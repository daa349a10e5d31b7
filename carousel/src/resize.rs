use crate::ItemWidth;

/// Resolves the panel width from viewport width changes.
///
/// Viewport widths that are not positive finite numbers are ignored and the previous width is
/// kept; providers commonly report `0` before the first layout pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResizeAdapter {
    item_width: ItemWidth,
    viewport_width: f64,
    panel_width: f64,
}

impl ResizeAdapter {
    pub fn new(item_width: ItemWidth, viewport_width: f64) -> Self {
        Self {
            item_width,
            viewport_width,
            panel_width: item_width.resolve(viewport_width),
        }
    }

    pub fn item_width(&self) -> ItemWidth {
        self.item_width
    }

    pub fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    pub fn panel_width(&self) -> f64 {
        self.panel_width
    }

    /// Records a new viewport width. Returns the new panel width if it changed.
    pub fn update(&mut self, viewport_width: f64) -> Option<f64> {
        if !viewport_width.is_finite() || viewport_width <= 0.0 {
            cwarn!(viewport_width, "ignoring invalid viewport width");
            return None;
        }
        self.viewport_width = viewport_width;
        let next = self.item_width.resolve(viewport_width);
        if next == self.panel_width {
            return None;
        }
        cdebug!(from = self.panel_width, to = next, "panel width changed");
        self.panel_width = next;
        Some(next)
    }
}
