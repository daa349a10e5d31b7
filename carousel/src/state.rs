/// Playback flags of a carousel.
///
/// The flags combine freely (`paused && stopped`, `paused && transitioning`, ...). Each named
/// event is a pure function returning the next state; applying the same event twice is a no-op.
///
/// `stopped` is sticky: it survives `pause` and `transition_end` and is only cleared by `play`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarouselState {
    pub paused: bool,
    pub stopped: bool,
    pub transitioning: bool,
}

/// Icon of the rotation control button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ControlIcon {
    Play,
    Pause,
}

impl CarouselState {
    pub const fn pause(self) -> Self {
        Self {
            paused: true,
            ..self
        }
    }

    pub const fn play(self) -> Self {
        Self {
            paused: false,
            stopped: false,
            ..self
        }
    }

    pub const fn stop(self) -> Self {
        Self {
            paused: true,
            stopped: true,
            ..self
        }
    }

    pub const fn transitioning(self) -> Self {
        Self {
            paused: true,
            transitioning: true,
            ..self
        }
    }

    /// Ends a transition; playback resumes unless the carousel was stopped.
    pub const fn transition_end(self) -> Self {
        Self {
            paused: self.stopped,
            transitioning: false,
            ..self
        }
    }

    /// What the rotation control does when pressed: resume if paused, otherwise stop.
    pub const fn toggle(self) -> Self {
        if self.paused { self.play() } else { self.stop() }
    }

    /// Whether autoplay ticks should be scheduled at all.
    pub const fn is_running(self) -> bool {
        !self.paused && !self.stopped
    }

    pub const fn control_icon(self) -> ControlIcon {
        if self.stopped {
            ControlIcon::Play
        } else if self.transitioning {
            ControlIcon::Pause
        } else if self.paused {
            ControlIcon::Play
        } else {
            ControlIcon::Pause
        }
    }
}
