use alloc::string::String;

/// Configuration rejected by [`crate::Carousel::new`].
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("a carousel needs at least one panel")]
    NoPanels,
    #[error("aria_label must identify the carousel and cannot be empty")]
    MissingAriaLabel,
    #[error("item width must be \"full\" or a positive number of pixels, got {0}")]
    InvalidItemWidth(f64),
    #[error("item width must be \"full\" or a positive number of pixels, got {0:?}")]
    InvalidItemWidthKeyword(String),
    #[error("viewport width must be a positive number of pixels, got {0}")]
    InvalidViewportWidth(f64),
    #[error("visible count must be at least 1")]
    InvalidVisible,
    #[error("autoplay interval must be greater than zero")]
    InvalidInterval,
}
