use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::ControlIcon;

/// How assistive technology should announce slide changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LiveRegion {
    /// Autoplaying carousels must not announce every rotation.
    Off,
    Polite,
}

/// A slide picker dot.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dot {
    /// 0-based slide this dot navigates to (pass it to `go_to`).
    pub slide_index: usize,
    /// e.g. `"2 of 5"`.
    pub label: String,
    pub current: bool,
}

/// What the navigation chrome should look like for the current state.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NavControls {
    /// `None` when arrows are disabled in the configuration.
    pub prev_enabled: Option<bool>,
    pub next_enabled: Option<bool>,
    /// Empty unless dots are enabled.
    pub dots: Vec<Dot>,
    /// Rotation control; only shown next to the dots of an autoplaying carousel.
    pub toggle: Option<ControlIcon>,
    pub live: LiveRegion,
    pub on_dark: bool,
}

pub(crate) struct ControlsInput {
    pub display_index: usize,
    pub count: usize,
    pub looped: bool,
    pub nav_arrows: bool,
    pub nav_dots: bool,
    pub nav_on_dark: bool,
    pub autoplay: bool,
    pub icon: ControlIcon,
}

impl NavControls {
    pub(crate) fn build(input: ControlsInput) -> Self {
        let ControlsInput {
            display_index,
            count,
            looped,
            nav_arrows,
            nav_dots,
            nav_on_dark,
            autoplay,
            icon,
        } = input;

        let (prev_enabled, next_enabled) = if nav_arrows {
            (
                Some(looped || display_index > 0),
                Some(looped || display_index + 1 < count),
            )
        } else {
            (None, None)
        };

        let dots = if nav_dots {
            (0..count)
                .map(|i| Dot {
                    slide_index: i,
                    label: format!("{} of {}", i + 1, count),
                    current: i == display_index,
                })
                .collect()
        } else {
            Vec::new()
        };

        Self {
            prev_enabled,
            next_enabled,
            dots,
            toggle: (nav_dots && autoplay).then_some(icon),
            live: if autoplay {
                LiveRegion::Off
            } else {
                LiveRegion::Polite
            },
            on_dark: nav_on_dark,
        }
    }
}
