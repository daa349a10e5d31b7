//! Adapter utilities for the `carousel` crate.
//!
//! The `carousel` crate is UI-agnostic and focuses on layout math, gestures and springs. This
//! crate provides the timing plumbing every adapter otherwise re-implements:
//!
//! - Autoplay on a repeating interval, fully suspended while paused
//! - Debounced pause/resume on hover
//! - Page visibility and scroll position signals
//! - A [`Controller`] that merges all of the above into one carousel and tears it down on unmount
//!
//! Timers are deadline handles driven by the adapter's `tick(now_ms)`; nothing here spawns
//! threads or touches a UI toolkit.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod autoplay;
mod controller;
mod hover;
mod signals;
mod timer;


pub use autoplay::AutoplayScheduler;
pub use controller::Controller;
pub use hover::{HOVER_DELAY_MS, HoverAction, HoverDebounce};
pub use signals::{
    PageVisibility, PageVisibilityProvider, SCROLL_PAUSE_THRESHOLD, ScrollPosition,
    ScrollPositionProvider, ViewportWidthProvider,
};
pub use timer::{Interval, Timeout};
