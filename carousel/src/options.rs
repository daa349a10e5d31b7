use alloc::string::String;
use alloc::sync::Arc;

use crate::{ConfigError, ItemWidth, SpringConfig};

/// Called with the 1-based display label whenever the committed slide changes.
pub type SlideChangeCallback = Arc<dyn Fn(usize) + Send + Sync>;

/// Data-only carousel configuration.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`; missing fields
/// take their defaults. A missing `aria_label` is rejected by [`CarouselConfig::validate`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CarouselConfig {
    /// Identifies the carousel instance. Must not be empty.
    pub aria_label: String,
    pub autoplay: bool,
    pub interval_ms: u64,
    /// Keeps the edge navigation arrows enabled on the first and last slide.
    #[cfg_attr(feature = "serde", serde(rename = "loop"))]
    pub looped: bool,
    pub nav_arrows: bool,
    pub nav_dots: bool,
    /// Styling hint for renderers; the engine only passes it through.
    pub nav_on_dark: bool,
    pub item_width: ItemWidth,
    /// Number of panels considered visible at once (affects the anchor slot when moving
    /// backward).
    pub visible: usize,
    pub spring: SpringConfig,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            aria_label: String::new(),
            autoplay: false,
            interval_ms: 5000,
            looped: false,
            nav_arrows: true,
            nav_dots: false,
            nav_on_dark: false,
            item_width: ItemWidth::Full,
            visible: 1,
            spring: SpringConfig::default(),
        }
    }
}

impl CarouselConfig {
    pub fn new(aria_label: impl Into<String>) -> Self {
        Self {
            aria_label: aria_label.into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.aria_label.trim().is_empty() {
            return Err(ConfigError::MissingAriaLabel);
        }
        if self.visible == 0 {
            return Err(ConfigError::InvalidVisible);
        }
        if self.interval_ms == 0 {
            return Err(ConfigError::InvalidInterval);
        }
        self.item_width.validate()?;
        Ok(())
    }
}

/// Configuration for [`crate::Carousel`].
///
/// Cheap to clone: the callback is stored in an `Arc`.
#[derive(Clone)]
pub struct CarouselOptions {
    pub config: CarouselConfig,
    /// Viewport width at mount (aka the first value of the viewport width provider).
    pub initial_viewport_width: f64,
    pub on_slide_change: Option<SlideChangeCallback>,
}

impl CarouselOptions {
    pub fn new(aria_label: impl Into<String>) -> Self {
        Self::from_config(CarouselConfig::new(aria_label))
    }

    pub fn from_config(config: CarouselConfig) -> Self {
        Self {
            config,
            initial_viewport_width: 0.0,
            on_slide_change: None,
        }
    }

    pub fn with_autoplay(mut self, autoplay: bool) -> Self {
        self.config.autoplay = autoplay;
        self
    }

    pub fn with_interval_ms(mut self, interval_ms: u64) -> Self {
        self.config.interval_ms = interval_ms;
        self
    }

    pub fn with_loop(mut self, looped: bool) -> Self {
        self.config.looped = looped;
        self
    }

    pub fn with_nav_arrows(mut self, nav_arrows: bool) -> Self {
        self.config.nav_arrows = nav_arrows;
        self
    }

    pub fn with_nav_dots(mut self, nav_dots: bool) -> Self {
        self.config.nav_dots = nav_dots;
        self
    }

    pub fn with_nav_on_dark(mut self, nav_on_dark: bool) -> Self {
        self.config.nav_on_dark = nav_on_dark;
        self
    }

    pub fn with_item_width(mut self, item_width: ItemWidth) -> Self {
        self.config.item_width = item_width;
        self
    }

    pub fn with_visible(mut self, visible: usize) -> Self {
        self.config.visible = visible;
        self
    }

    pub fn with_spring(mut self, spring: SpringConfig) -> Self {
        self.config.spring = spring;
        self
    }

    pub fn with_initial_viewport_width(mut self, width: f64) -> Self {
        self.initial_viewport_width = width;
        self
    }

    /// The callback is not invoked at mount; the first call follows the first slide change.
    pub fn with_on_slide_change(
        mut self,
        on_slide_change: Option<impl Fn(usize) + Send + Sync + 'static>,
    ) -> Self {
        self.on_slide_change = on_slide_change.map(|f| Arc::new(f) as _);
        self
    }
}

impl core::fmt::Debug for CarouselOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CarouselOptions")
            .field("config", &self.config)
            .field("initial_viewport_width", &self.initial_viewport_width)
            .field("on_slide_change", &self.on_slide_change.is_some())
            .finish()
    }
}
