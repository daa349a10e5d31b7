use alloc::vec::Vec;

use crate::controls::ControlsInput;
use crate::wrap::{display_index, display_label};
use crate::{
    AnimationDriver, CarouselConfig, CarouselOptions, CarouselState, ConfigError, Direction,
    DragSample, DragSession, GestureController, GestureOutcome, GesturePhase, ItemWidth,
    NavControls, Panel, PanelOffset, PositionEngine, ResizeAdapter, SlideChangeCallback,
    Viewport,
};

/// A headless infinite carousel.
///
/// The carousel owns the single logical index. It only changes through [`Self::advance`],
/// [`Self::go_to`] and drag commits ([`Self::on_drag`]); every change re-runs the layout and
/// retargets the springs before any callback observes it.
///
/// This type holds no UI objects and no timers. The adapter feeds it drag samples, viewport
/// widths and frame timestamps, and reads offsets back via [`Self::values`]. Autoplay, hover and
/// page signals live in the `carousel-adapter` crate.
#[derive(Clone)]
pub struct Carousel<T = ()> {
    options: CarouselOptions,
    panels: Vec<Panel<T>>,
    logical: i64,
    direction: Direction,
    state: CarouselState,
    resize: ResizeAdapter,
    engine: PositionEngine,
    driver: AnimationDriver,
    gesture: GestureController,
    last_frame_ms: Option<u64>,
    last_label: usize,
    unmounted: bool,
}

impl<T> Carousel<T> {
    /// Mounts a carousel over `contents`; panel `i` gets `slide_index = i`.
    pub fn new(
        options: CarouselOptions,
        contents: impl IntoIterator<Item = T>,
    ) -> Result<Self, ConfigError> {
        options.config.validate()?;
        let panels: Vec<Panel<T>> = contents
            .into_iter()
            .enumerate()
            .map(|(slide_index, content)| Panel {
                slide_index,
                content,
            })
            .collect();
        if panels.is_empty() {
            return Err(ConfigError::NoPanels);
        }
        let viewport_width = options.initial_viewport_width;
        if options.config.item_width == ItemWidth::Full && !is_valid_width(viewport_width) {
            return Err(ConfigError::InvalidViewportWidth(viewport_width));
        }

        let count = panels.len();
        if count <= 2 {
            cwarn!(
                count,
                "carousel with two or fewer panels: wrap-around stays correct but seams may show"
            );
        }
        cdebug!(
            count,
            autoplay = options.config.autoplay,
            visible = options.config.visible,
            "Carousel::new"
        );

        let resize = ResizeAdapter::new(options.config.item_width, viewport_width);
        let mut engine = PositionEngine::new(count);
        let viewport = Viewport {
            width: resize.panel_width(),
            visible_count: options.config.visible,
        };
        let driver = AnimationDriver::new(
            engine.layout_immediate(0, viewport, Direction::Forward),
            options.config.spring,
        );

        Ok(Self {
            options,
            panels,
            logical: 0,
            direction: Direction::Forward,
            state: CarouselState::default(),
            resize,
            engine,
            driver,
            gesture: GestureController::new(),
            last_frame_ms: None,
            last_label: 1,
            unmounted: false,
        })
    }

    pub fn options(&self) -> &CarouselOptions {
        &self.options
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.options.config
    }

    /// Replaces the data-only configuration.
    ///
    /// A changed item width re-resolves the panel width and re-lays out immediately; a changed
    /// spring applies from the next frame. Logical index and playback state are kept.
    ///
    /// Switching to [`ItemWidth::Full`] fails with [`ConfigError::InvalidViewportWidth`] until a
    /// positive viewport width has been seen, either at mount or through [`Self::resize`].
    pub fn set_config(&mut self, config: CarouselConfig) -> Result<(), ConfigError> {
        config.validate()?;
        let viewport_width = self.resize.viewport_width();
        if config.item_width == ItemWidth::Full && !is_valid_width(viewport_width) {
            return Err(ConfigError::InvalidViewportWidth(viewport_width));
        }
        let prev = core::mem::replace(&mut self.options.config, config);
        ctrace!(
            autoplay = self.options.config.autoplay,
            interval_ms = self.options.config.interval_ms,
            "Carousel::set_config"
        );

        if prev.spring != self.options.config.spring {
            self.driver.set_config(self.options.config.spring);
        }
        if prev.item_width != self.options.config.item_width {
            let prev_width = self.resize.panel_width();
            self.resize =
                ResizeAdapter::new(self.options.config.item_width, self.resize.viewport_width());
            if self.resize.panel_width() != prev_width {
                self.relayout_immediate();
            }
        }
        Ok(())
    }

    /// Clones the current configuration, applies `f`, then delegates to `set_config`.
    pub fn update_config(
        &mut self,
        f: impl FnOnce(&mut CarouselConfig),
    ) -> Result<(), ConfigError> {
        let mut next = self.options.config.clone();
        f(&mut next);
        self.set_config(next)
    }

    pub fn set_on_slide_change(
        &mut self,
        on_slide_change: Option<impl Fn(usize) + Send + Sync + 'static>,
    ) {
        self.options.on_slide_change =
            on_slide_change.map(|f| alloc::sync::Arc::new(f) as SlideChangeCallback);
    }

    pub fn panels(&self) -> &[Panel<T>] {
        &self.panels
    }

    pub fn panel_count(&self) -> usize {
        self.panels.len()
    }

    pub fn logical_index(&self) -> i64 {
        self.logical
    }

    /// 0-based slide currently shown.
    pub fn display_index(&self) -> usize {
        display_index(self.logical, self.panels.len())
    }

    /// 1-based slide label currently shown.
    pub fn display_label(&self) -> usize {
        display_label(self.logical, self.panels.len())
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn state(&self) -> CarouselState {
        self.state
    }

    pub fn viewport(&self) -> Viewport {
        Viewport {
            width: self.resize.panel_width(),
            visible_count: self.options.config.visible,
        }
    }

    pub fn panel_width(&self) -> f64 {
        self.resize.panel_width()
    }

    /// Targets of the most recent layout.
    pub fn offsets(&self) -> &[PanelOffset] {
        self.engine.offsets()
    }

    /// Current interpolated offset of every panel, in panel order.
    pub fn values(&self) -> impl ExactSizeIterator<Item = f64> + '_ {
        self.driver.values()
    }

    pub fn animation(&self) -> &AnimationDriver {
        &self.driver
    }

    pub fn is_animating(&self) -> bool {
        self.driver.is_animating()
    }

    pub fn gesture_phase(&self) -> GesturePhase {
        self.gesture.phase()
    }

    pub fn drag_session(&self) -> Option<&DragSession> {
        self.gesture.session()
    }

    pub fn is_unmounted(&self) -> bool {
        self.unmounted
    }

    pub fn controls(&self) -> NavControls {
        let config = &self.options.config;
        NavControls::build(ControlsInput {
            display_index: self.display_index(),
            count: self.panels.len(),
            looped: config.looped,
            nav_arrows: config.nav_arrows,
            nav_dots: config.nav_dots,
            nav_on_dark: config.nav_on_dark,
            autoplay: config.autoplay,
            icon: self.state.control_icon(),
        })
    }

    /// Moves by `delta` slides (negative goes backward).
    pub fn advance(&mut self, delta: i64) {
        if self.unmounted || delta == 0 {
            return;
        }
        self.logical = self.logical.saturating_add(delta);
        self.direction = Direction::from_delta(delta);
        ctrace!(delta, logical = self.logical, "Carousel::advance");
        self.relayout(0.0, None);
        self.notify_slide_change();
    }

    /// Jumps to a 0-based slide. The direction is the sign of `target - current`; the shortest
    /// visual path is not guaranteed.
    pub fn go_to(&mut self, target: usize) {
        if self.unmounted {
            return;
        }
        let target = target as i64;
        self.direction = if self.logical > target {
            Direction::Backward
        } else {
            Direction::Forward
        };
        self.logical = target;
        ctrace!(target, direction = ?self.direction, "Carousel::go_to");
        self.relayout(0.0, None);
        self.notify_slide_change();
    }

    pub fn play(&mut self) {
        self.set_state(self.state.play());
    }

    pub fn pause(&mut self) {
        self.set_state(self.state.pause());
    }

    pub fn stop(&mut self) {
        self.set_state(self.state.stop());
    }

    /// The rotation control: resumes when paused, otherwise stops.
    pub fn toggle_playback(&mut self) {
        self.set_state(self.state.toggle());
    }

    /// Keyboard focus entered a slide's content; rotation must not move it away.
    pub fn on_panel_focus(&mut self) {
        self.stop();
    }

    fn set_state(&mut self, next: CarouselState) {
        if self.unmounted || self.state == next {
            return;
        }
        ctrace!(?next, "Carousel state");
        self.state = next;
    }

    /// Feeds one drag sample.
    pub fn on_drag(&mut self, sample: DragSample) -> GestureOutcome {
        if self.unmounted {
            return GestureOutcome::Ignored;
        }
        let outcome = self.gesture.on_sample(sample, self.resize.panel_width());
        match outcome {
            GestureOutcome::Ignored => {}
            GestureOutcome::Stop => self.stop(),
            GestureOutcome::Dragging {
                carry,
                direction,
                relayout,
            } => {
                self.set_state(self.state.transitioning());
                if relayout {
                    self.direction = direction;
                    self.relayout(carry, None);
                }
            }
            GestureOutcome::Released {
                delta,
                carry_velocity,
            } => {
                self.set_state(self.state.transition_end());
                if delta != 0 {
                    self.logical = self.logical.saturating_add(delta);
                    self.direction = Direction::from_delta(delta);
                    self.relayout(0.0, Some(carry_velocity));
                    self.notify_slide_change();
                } else {
                    self.relayout(0.0, None);
                }
                self.settle_gesture_if_idle();
            }
        }
        outcome
    }

    /// Abandons an active drag; panels spring back to the committed layout.
    pub fn cancel_drag(&mut self) {
        if self.unmounted || !self.gesture.cancel() {
            return;
        }
        self.set_state(self.state.transition_end());
        self.relayout(0.0, None);
        self.settle_gesture_if_idle();
    }

    /// Applies a viewport width change. Returns `true` when the panel width changed, in which
    /// case every panel was re-laid out without animation.
    pub fn resize(&mut self, viewport_width: f64) -> bool {
        if self.unmounted || self.resize.update(viewport_width).is_none() {
            return false;
        }
        self.relayout_immediate();
        true
    }

    /// Advances the springs to `now_ms`. Returns `true` while more frames are needed.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if self.unmounted {
            return false;
        }
        if !self.driver.is_animating() {
            self.last_frame_ms = None;
            self.settle_gesture_if_idle();
            return false;
        }
        let dt_ms = self
            .last_frame_ms
            .map_or(0, |last| now_ms.saturating_sub(last));
        self.last_frame_ms = Some(now_ms);
        let running = self.driver.tick(dt_ms as f64 / 1000.0);
        if !running {
            self.last_frame_ms = None;
            self.settle_gesture_if_idle();
        }
        running
    }

    /// Tears the carousel down: drops any drag session and halts the springs. Every later call
    /// is a no-op.
    pub fn unmount(&mut self) {
        if self.unmounted {
            return;
        }
        cdebug!(
            aria_label = %self.options.config.aria_label,
            "Carousel::unmount"
        );
        self.gesture.cancel();
        self.driver.halt();
        self.last_frame_ms = None;
        self.unmounted = true;
    }

    fn relayout(&mut self, carry: f64, carry_velocity: Option<f64>) {
        let viewport = Viewport {
            width: self.resize.panel_width(),
            visible_count: self.options.config.visible,
        };
        let offsets = self
            .engine
            .layout(self.logical, viewport, self.direction, carry);
        self.driver.apply(offsets, carry_velocity);
    }

    fn relayout_immediate(&mut self) {
        let viewport = Viewport {
            width: self.resize.panel_width(),
            visible_count: self.options.config.visible,
        };
        let offsets = self
            .engine
            .layout_immediate(self.logical, viewport, self.direction);
        self.driver.apply(offsets, None);
    }

    fn settle_gesture_if_idle(&mut self) {
        if !self.driver.is_animating() {
            self.gesture.settle();
        }
    }

    fn notify_slide_change(&mut self) {
        let label = self.display_label();
        if label == self.last_label {
            return;
        }
        self.last_label = label;
        let Some(cb) = self.options.on_slide_change.clone() else {
            return;
        };
        invoke_isolated(&cb, label);
    }
}

fn is_valid_width(width: f64) -> bool {
    width.is_finite() && width > 0.0
}

#[cfg(feature = "std")]
fn invoke_isolated(cb: &SlideChangeCallback, label: usize) {
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| cb(label)));
    if result.is_err() {
        cwarn!(label, "on_slide_change panicked; carousel state is unaffected");
    }
}

#[cfg(not(feature = "std"))]
fn invoke_isolated(cb: &SlideChangeCallback, label: usize) {
    cb(label);
}

impl<T: core::fmt::Debug> core::fmt::Debug for Carousel<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Carousel")
            .field("options", &self.options)
            .field("panels", &self.panels)
            .field("logical", &self.logical)
            .field("direction", &self.direction)
            .field("state", &self.state)
            .field("panel_width", &self.resize.panel_width())
            .field("gesture", &self.gesture.phase())
            .field("unmounted", &self.unmounted)
            .finish_non_exhaustive()
    }
}
