use alloc::vec::Vec;

use crate::spring::MAX_FRAME_SECS;
use crate::{PanelOffset, Spring, SpringConfig};

/// Owns one spring per panel and relaxes them toward the latest layout.
///
/// Immediate offsets are applied in the same frame. Animated ones keep the spring's current
/// velocity (or take a carried gesture velocity), so a retarget mid-flight stays continuous.
#[derive(Clone, Debug)]
pub struct AnimationDriver {
    springs: Vec<Spring>,
    config: SpringConfig,
    rest_ticks: u8,
    animating: bool,
    halted: bool,
}

impl AnimationDriver {
    pub fn new(initial: &[PanelOffset], config: SpringConfig) -> Self {
        Self {
            springs: initial.iter().map(|o| Spring::at(o.target)).collect(),
            config,
            rest_ticks: 0,
            animating: false,
            halted: false,
        }
    }

    pub fn config(&self) -> SpringConfig {
        self.config
    }

    pub fn set_config(&mut self, config: SpringConfig) {
        self.config = config;
    }

    /// Current interpolated offset of every panel.
    pub fn values(&self) -> impl ExactSizeIterator<Item = f64> + '_ {
        self.springs.iter().map(|s| s.position)
    }

    pub fn value(&self, index: usize) -> Option<f64> {
        self.springs.get(index).map(|s| s.position)
    }

    pub fn springs(&self) -> &[Spring] {
        &self.springs
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    pub fn is_halted(&self) -> bool {
        self.halted
    }

    /// Retargets every spring.
    ///
    /// `carry_velocity` (px/s) replaces the current velocity of animated springs; it is used to
    /// hand the release speed of a drag over to the animation. See [`Spring::carry`] for how it
    /// is limited per spring.
    pub fn apply(&mut self, offsets: &[PanelOffset], carry_velocity: Option<f64>) {
        if self.halted {
            return;
        }
        debug_assert_eq!(offsets.len(), self.springs.len());
        let mut any_animated = false;
        for (spring, offset) in self.springs.iter_mut().zip(offsets) {
            spring.target = offset.target;
            if offset.immediate {
                spring.snap_to_target();
                continue;
            }
            if let Some(v) = carry_velocity {
                spring.carry(v, self.config);
            }
            if !spring.is_at_rest(self.config.epsilon) {
                any_animated = true;
            } else {
                spring.snap_to_target();
            }
        }
        self.rest_ticks = 0;
        self.animating = any_animated;
    }

    /// Advances all springs by `dt_secs`.
    ///
    /// Returns `true` while the driver still needs frames. The driver settles once every spring
    /// has been at rest for two consecutive ticks; values then snap exactly onto their targets.
    pub fn tick(&mut self, dt_secs: f64) -> bool {
        if self.halted || !self.animating {
            return false;
        }
        let dt = dt_secs.clamp(0.0, MAX_FRAME_SECS);
        let config = self.config;
        let mut at_rest = true;
        for spring in &mut self.springs {
            spring.tick(dt, config);
            at_rest &= spring.is_at_rest(config.epsilon);
        }

        if !at_rest {
            self.rest_ticks = 0;
            return true;
        }
        self.rest_ticks = self.rest_ticks.saturating_add(1);
        if self.rest_ticks < 2 {
            return true;
        }

        for spring in &mut self.springs {
            spring.snap_to_target();
        }
        self.rest_ticks = 0;
        self.animating = false;
        ctrace!("AnimationDriver settled");
        false
    }

    /// Stops advancing for good; later `apply`/`tick` calls are ignored.
    pub fn halt(&mut self) {
        self.halted = true;
        self.animating = false;
    }
}
