use crate::{Direction, TargetKind};

/// One sample of a horizontal drag, decoupled from any input-event API.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DragSample {
    /// Cumulative offset across gestures (px).
    pub offset_x: f64,
    /// Horizontal velocity (px/ms). Zero means the pointer is not moving.
    pub velocity_x: f64,
    /// Sign of the latest movement: negative to the left, positive to the right.
    pub direction_x: f64,
    /// `true` while the pointer is down.
    pub is_dragging: bool,
    /// Displacement since the gesture started (px).
    pub movement_x: f64,
    pub target: TargetKind,
}

/// State of an in-flight drag. Exists only between gesture start and release/cancel.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DragSession {
    pub origin_offset: f64,
    pub current_offset: f64,
    pub velocity: f64,
    pub direction: f64,
    pub is_pointer_down: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GesturePhase {
    #[default]
    Idle,
    Active,
    /// Released; panels are still springing toward the committed layout.
    Settling,
}

/// What the engine has to do in response to a drag sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureOutcome {
    Ignored,
    /// The pointer went down on a text field: stop playback, do not navigate.
    Stop,
    /// Pointer is down. `relayout` is false when the pointer is not moving.
    Dragging {
        carry: f64,
        direction: Direction,
        relayout: bool,
    },
    /// Pointer released. `delta == 0` means the panels spring back to the committed layout.
    Released {
        delta: i64,
        /// Release speed handed to the springs (px/s).
        carry_velocity: f64,
    },
}

/// Turns raw drag samples into layout updates and committed index deltas.
#[derive(Clone, Debug, Default)]
pub struct GestureController {
    phase: GesturePhase,
    session: Option<DragSession>,
}

impl GestureController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.phase == GesturePhase::Active
    }

    pub fn on_sample(&mut self, sample: DragSample, width: f64) -> GestureOutcome {
        if sample.is_dragging && sample.target == TargetKind::TextInput {
            return GestureOutcome::Stop;
        }

        if sample.is_dragging {
            let session = self.session.get_or_insert(DragSession {
                origin_offset: sample.offset_x - sample.movement_x,
                current_offset: sample.offset_x,
                velocity: sample.velocity_x,
                direction: sample.direction_x,
                is_pointer_down: true,
            });
            session.current_offset = sample.offset_x;
            session.velocity = sample.velocity_x;
            session.direction = sample.direction_x;
            self.phase = GesturePhase::Active;

            return GestureOutcome::Dragging {
                carry: sample.movement_x,
                direction: Direction::from_sign(-sample.velocity_x),
                relayout: sample.velocity_x != 0.0,
            };
        }

        if self.session.take().is_none() {
            return GestureOutcome::Ignored;
        }
        self.phase = GesturePhase::Settling;

        if sample.velocity_x == 0.0 || width <= 0.0 {
            cdebug!(movement = sample.movement_x, "drag released without velocity");
            return GestureOutcome::Released {
                delta: 0,
                carry_velocity: 0.0,
            };
        }

        let delta = commit_delta(sample.movement_x, sample.direction_x, width);
        cdebug!(
            delta,
            velocity = sample.velocity_x,
            movement = sample.movement_x,
            "drag committed"
        );
        GestureOutcome::Released {
            delta,
            carry_velocity: sample.velocity_x * 1000.0,
        }
    }

    /// Drops an active session. Returns `true` when there was one.
    pub fn cancel(&mut self) -> bool {
        if self.session.take().is_none() {
            return false;
        }
        self.phase = GesturePhase::Settling;
        true
    }

    /// Called once the springs have come to rest after a release.
    pub fn settle(&mut self) {
        if self.phase == GesturePhase::Settling {
            self.phase = GesturePhase::Idle;
        }
    }
}

/// Whole slides to move on release: one slide, against the drag direction.
fn commit_delta(movement: f64, direction: f64, width: f64) -> i64 {
    let slides = (-movement + (width + movement)) / width;
    // Round to the nearest whole slide; `slides` is positive.
    let whole = ((slides + 0.5) as i64).max(1);
    if direction > 0.0 { -whole } else { whole }
}
