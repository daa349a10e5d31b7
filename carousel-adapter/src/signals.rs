//! Collaborator interfaces, each reduced to the one signal the carousel needs.

/// Scrolling further than this (px) pauses autoplay; the carousel is out of view.
pub const SCROLL_PAUSE_THRESHOLD: f64 = 700.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PageVisibility {
    #[default]
    Visible,
    Hidden,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollPosition {
    pub scroll_x: f64,
    pub scroll_y: f64,
}

impl ScrollPosition {
    pub fn exceeds_pause_threshold(&self) -> bool {
        self.scroll_y > SCROLL_PAUSE_THRESHOLD
    }
}

pub trait ViewportWidthProvider {
    fn viewport_width(&self) -> f64;
}

impl<F: Fn() -> f64> ViewportWidthProvider for F {
    fn viewport_width(&self) -> f64 {
        self()
    }
}

pub trait PageVisibilityProvider {
    fn visibility(&self) -> PageVisibility;
}

impl<F: Fn() -> PageVisibility> PageVisibilityProvider for F {
    fn visibility(&self) -> PageVisibility {
        self()
    }
}

pub trait ScrollPositionProvider {
    fn scroll_position(&self) -> ScrollPosition;
}

impl<F: Fn() -> ScrollPosition> ScrollPositionProvider for F {
    fn scroll_position(&self) -> ScrollPosition {
        self()
    }
}
