use carousel::{Carousel, CarouselOptions, CarouselState, ConfigError, DragSample, GestureOutcome};

use crate::{
    AutoplayScheduler, HoverAction, HoverDebounce, PageVisibility, PageVisibilityProvider,
    ScrollPosition, ScrollPositionProvider, ViewportWidthProvider,
};

/// A framework-neutral controller that wraps a [`carousel::Carousel`] and owns every timing
/// source acting on it (autoplay, hover debounce, page signals).
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_drag` / `on_viewport_width` / `on_visibility_change` / `on_scroll` /
///   `on_pointer_enter` / `on_pointer_leave` when UI events occur
/// - `tick(now_ms)` once per display frame
///
/// and render from `carousel().values()`.
///
/// All timers are handles owned by the controller. [`Self::unmount`] (also run on drop)
/// cancels them and halts animation; afterwards every entry point is a no-op.
pub struct Controller<T = ()> {
    carousel: Carousel<T>,
    autoplay: AutoplayScheduler,
    hover: HoverDebounce,
    unmounted: bool,
}

impl<T> Controller<T> {
    pub fn new(
        options: CarouselOptions,
        contents: impl IntoIterator<Item = T>,
        now_ms: u64,
    ) -> Result<Self, ConfigError> {
        Ok(Self::from_carousel(Carousel::new(options, contents)?, now_ms))
    }

    /// Mounts a carousel reading the initial viewport width and page visibility from the
    /// providers. A page that is already hidden starts stopped.
    pub fn mount(
        options: CarouselOptions,
        contents: impl IntoIterator<Item = T>,
        viewport: &impl ViewportWidthProvider,
        visibility: &impl PageVisibilityProvider,
        now_ms: u64,
    ) -> Result<Self, ConfigError> {
        let options = options.with_initial_viewport_width(viewport.viewport_width());
        let mut c = Self::new(options, contents, now_ms)?;
        c.on_visibility_change(visibility.visibility(), now_ms);
        Ok(c)
    }

    pub fn from_carousel(carousel: Carousel<T>, now_ms: u64) -> Self {
        let config = carousel.config();
        let autoplay =
            AutoplayScheduler::new(config.autoplay, config.interval_ms, carousel.state(), now_ms);
        Self {
            carousel,
            autoplay,
            hover: HoverDebounce::default(),
            unmounted: false,
        }
    }

    pub fn carousel(&self) -> &Carousel<T> {
        &self.carousel
    }

    pub fn autoplay(&self) -> &AutoplayScheduler {
        &self.autoplay
    }

    pub fn pending_hover(&self) -> Option<HoverAction> {
        self.hover.pending()
    }

    pub fn state(&self) -> CarouselState {
        self.carousel.state()
    }

    pub fn is_unmounted(&self) -> bool {
        self.unmounted
    }

    pub fn advance(&mut self, delta: i64) {
        if self.unmounted {
            return;
        }
        self.carousel.advance(delta);
    }

    pub fn go_to(&mut self, display_index: usize) {
        if self.unmounted {
            return;
        }
        self.carousel.go_to(display_index);
    }

    pub fn play(&mut self, now_ms: u64) {
        self.with_state(now_ms, |c| c.play());
    }

    pub fn pause(&mut self, now_ms: u64) {
        self.with_state(now_ms, |c| c.pause());
    }

    pub fn stop(&mut self, now_ms: u64) {
        self.with_state(now_ms, |c| c.stop());
    }

    pub fn toggle_playback(&mut self, now_ms: u64) {
        self.with_state(now_ms, |c| c.toggle_playback());
    }

    pub fn on_panel_focus(&mut self, now_ms: u64) {
        self.with_state(now_ms, |c| c.on_panel_focus());
    }

    pub fn on_drag(&mut self, sample: DragSample, now_ms: u64) -> GestureOutcome {
        if self.unmounted {
            return GestureOutcome::Ignored;
        }
        let outcome = self.carousel.on_drag(sample);
        self.sync(now_ms);
        outcome
    }

    pub fn cancel_drag(&mut self, now_ms: u64) {
        self.with_state(now_ms, |c| c.cancel_drag());
    }

    /// Pushes a viewport width change. Returns `true` when panels were re-laid out.
    pub fn on_viewport_width(&mut self, width: f64) -> bool {
        if self.unmounted {
            return false;
        }
        self.carousel.resize(width)
    }

    /// Pulls the current width from a provider.
    pub fn sync_viewport(&mut self, provider: &impl ViewportWidthProvider) -> bool {
        self.on_viewport_width(provider.viewport_width())
    }

    /// A hidden page stops the carousel; becoming visible again does not resume it.
    pub fn on_visibility_change(&mut self, visibility: PageVisibility, now_ms: u64) {
        if visibility == PageVisibility::Hidden {
            adebug!(now_ms, "page hidden, stopping carousel");
            self.stop(now_ms);
        }
    }

    /// Scrolling the carousel out of view pauses it (it does not stop it).
    pub fn on_scroll(&mut self, position: ScrollPosition, now_ms: u64) {
        if position.exceeds_pause_threshold() {
            self.pause(now_ms);
        }
    }

    pub fn sync_scroll(&mut self, provider: &impl ScrollPositionProvider, now_ms: u64) {
        self.on_scroll(provider.scroll_position(), now_ms);
    }

    pub fn on_pointer_enter(&mut self, now_ms: u64) {
        if self.unmounted || !self.autoplay.is_enabled() {
            return;
        }
        self.hover.on_enter(self.carousel.state(), now_ms);
    }

    pub fn on_pointer_leave(&mut self, now_ms: u64) {
        if self.unmounted || !self.autoplay.is_enabled() {
            return;
        }
        self.hover.on_leave(self.carousel.state(), now_ms);
    }

    /// Toggles autoplay at runtime.
    pub fn set_autoplay(&mut self, enabled: bool, now_ms: u64) -> Result<(), ConfigError> {
        if self.unmounted {
            return Ok(());
        }
        self.carousel.update_config(|c| c.autoplay = enabled)?;
        if !enabled {
            self.hover.cancel();
        }
        self.autoplay
            .set_enabled(enabled, self.carousel.state(), now_ms);
        Ok(())
    }

    /// Changes the autoplay interval; a running timer restarts with the new period.
    pub fn set_interval_ms(&mut self, interval_ms: u64, now_ms: u64) -> Result<(), ConfigError> {
        if self.unmounted {
            return Ok(());
        }
        self.carousel.update_config(|c| c.interval_ms = interval_ms)?;
        self.autoplay
            .set_interval_ms(interval_ms, self.carousel.state(), now_ms);
        Ok(())
    }

    /// Runs due timers and advances the animation.
    ///
    /// Returns `true` while the springs still need frames.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if self.unmounted {
            return false;
        }

        match self.hover.poll(self.carousel.state(), now_ms) {
            Some(HoverAction::Pause) => self.pause(now_ms),
            Some(HoverAction::Play) => self.play(now_ms),
            None => {}
        }

        if self.autoplay.poll(self.carousel.state(), now_ms) {
            atrace!(now_ms, "autoplay tick");
            self.carousel.advance(1);
        }

        self.carousel.tick(now_ms)
    }

    /// Cancels every timer and halts the animation. Idempotent.
    pub fn unmount(&mut self) {
        if self.unmounted {
            return;
        }
        self.autoplay.cancel();
        self.hover.cancel();
        self.carousel.unmount();
        self.unmounted = true;
    }

    fn with_state(&mut self, now_ms: u64, f: impl FnOnce(&mut Carousel<T>)) {
        if self.unmounted {
            return;
        }
        f(&mut self.carousel);
        self.sync(now_ms);
    }

    fn sync(&mut self, now_ms: u64) {
        let state = self.carousel.state();
        if state.stopped {
            self.hover.cancel();
        }
        self.autoplay.sync(state, now_ms);
    }
}

impl<T> Drop for Controller<T> {
    fn drop(&mut self) {
        self.unmount();
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for Controller<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Controller")
            .field("carousel", &self.carousel)
            .field("autoplay", &self.autoplay)
            .field("hover", &self.hover)
            .field("unmounted", &self.unmounted)
            .finish()
    }
}
