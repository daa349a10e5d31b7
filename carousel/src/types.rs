use alloc::string::String;
use core::str::FromStr;

use crate::ConfigError;

/// Direction of the most recent movement of the strip.
///
/// `Forward` means the logical index grew (panels travel towards negative offsets).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

impl Direction {
    /// Negative signs map to `Backward`; zero and positive to `Forward`.
    pub fn from_sign(sign: f64) -> Self {
        if sign < 0.0 {
            Self::Backward
        } else {
            Self::Forward
        }
    }

    pub fn from_delta(delta: i64) -> Self {
        if delta < 0 {
            Self::Backward
        } else {
            Self::Forward
        }
    }

    pub fn signum(self) -> i64 {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }
}

/// A slide with a stable index assigned at construction.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Panel<T> {
    pub slide_index: usize,
    pub content: T,
}

/// Physical offset for one panel, plus whether the renderer should skip the animation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PanelOffset {
    pub target: f64,
    pub immediate: bool,
}

/// Panel geometry used by the layout.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    /// Width of a single panel in pixels.
    pub width: f64,
    /// Number of panels considered visible at once.
    pub visible_count: usize,
}

/// What element a drag sample started on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TargetKind {
    #[default]
    Panel,
    /// An embedded text field; dragging on it means the user is editing, not navigating.
    TextInput,
    Other,
}

/// Width of a single panel.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "ItemWidthRepr", into = "ItemWidthRepr")
)]
pub enum ItemWidth {
    /// Panels span the whole viewport.
    #[default]
    Full,
    /// Fixed width in pixels, rounded up to whole pixels.
    Px(f64),
}

impl ItemWidth {
    pub fn validate(self) -> Result<Self, ConfigError> {
        match self {
            Self::Full => Ok(self),
            Self::Px(w) if w.is_finite() && w > 0.0 => Ok(self),
            Self::Px(w) => Err(ConfigError::InvalidItemWidth(w)),
        }
    }

    /// Resolves the panel width for a given viewport width.
    pub fn resolve(self, viewport_width: f64) -> f64 {
        match self {
            Self::Full => viewport_width,
            Self::Px(w) => ceil_positive(w),
        }
    }
}

impl FromStr for ItemWidth {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("full") {
            return Ok(Self::Full);
        }
        match s.parse::<f64>() {
            Ok(w) => Self::Px(w).validate(),
            Err(_) => Err(ConfigError::InvalidItemWidthKeyword(String::from(s))),
        }
    }
}

#[cfg(feature = "serde")]
#[derive(Clone, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
enum ItemWidthRepr {
    Px(f64),
    Keyword(String),
}

#[cfg(feature = "serde")]
impl TryFrom<ItemWidthRepr> for ItemWidth {
    type Error = ConfigError;

    fn try_from(repr: ItemWidthRepr) -> Result<Self, Self::Error> {
        match repr {
            ItemWidthRepr::Px(w) => Self::Px(w).validate(),
            ItemWidthRepr::Keyword(k) => k.parse(),
        }
    }
}

#[cfg(feature = "serde")]
impl From<ItemWidth> for ItemWidthRepr {
    fn from(width: ItemWidth) -> Self {
        match width {
            ItemWidth::Full => Self::Keyword(String::from("full")),
            ItemWidth::Px(w) => Self::Px(w),
        }
    }
}

// `f64::ceil` lives in std. From 2^52 up every finite f64 is already a whole number.
fn ceil_positive(x: f64) -> f64 {
    const INTEGRAL_FROM: f64 = 4_503_599_627_370_496.0;
    if x >= INTEGRAL_FROM {
        return x;
    }
    let t = x as i64 as f64;
    if t < x { t + 1.0 } else { t }
}
