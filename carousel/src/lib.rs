//! A headless engine for infinite, drag-interactive slide carousels.
//!
//! For timer-driven behaviour (autoplay, hover debounce, page visibility), see the
//! `carousel-adapter` crate.
//!
//! This crate focuses on the parts that have to stay numerically consistent: mapping an
//! unbounded logical slide index onto physical panel offsets across modulo wrap-around,
//! interpreting drag gestures into committed slide changes, spring interpolation with
//! same-frame snaps for panels that wrap, and the flag-based playback state machine.
//!
//! It is UI-agnostic. A UI layer is expected to provide:
//! - viewport width
//! - drag samples (offset, velocity, direction, movement)
//! - frame timestamps
//!
//! and to read panel offsets back for rendering.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod animation;
mod carousel;
mod controls;
mod error;
mod gesture;
mod options;
mod position;
mod resize;
mod spring;
mod state;
mod types;
pub mod wrap;

#[cfg(test)]
mod tests;

pub use animation::AnimationDriver;
pub use carousel::Carousel;
pub use controls::{Dot, LiveRegion, NavControls};
pub use error::ConfigError;
pub use gesture::{DragSample, DragSession, GestureController, GestureOutcome, GesturePhase};
pub use options::{CarouselConfig, CarouselOptions, SlideChangeCallback};
pub use position::{Anchor, PositionEngine};
pub use resize::ResizeAdapter;
pub use spring::{Spring, SpringConfig};
pub use state::{CarouselState, ControlIcon};
pub use types::{Direction, ItemWidth, Panel, PanelOffset, TargetKind, Viewport};
