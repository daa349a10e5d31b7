/// Stiffness/damping pair for panel springs (unit mass).
///
/// The default sits just above critical damping (`2 * sqrt(stiffness)`), so a spring released
/// from rest approaches its target without overshoot.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    /// Distance (px) and speed (px/s) below which a spring counts as at rest.
    pub epsilon: f64,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: 170.0,
            damping: 26.1,
            epsilon: 0.5,
        }
    }
}

const STEP_SECS: f64 = 0.001;
/// Longest frame the integrator will simulate; larger gaps (e.g. a backgrounded tab) are cut.
pub(crate) const MAX_FRAME_SECS: f64 = 0.064;

/// A damped spring on one axis.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Spring {
    pub position: f64,
    /// px/s
    pub velocity: f64,
    pub target: f64,
}

impl Spring {
    pub fn at(position: f64) -> Self {
        Self {
            position,
            velocity: 0.0,
            target: position,
        }
    }

    pub fn snap_to_target(&mut self) {
        self.position = self.target;
        self.velocity = 0.0;
    }

    /// Hands a carried velocity (px/s) to the spring.
    ///
    /// Only motion toward the target is kept, and its speed is capped at
    /// `damping / 2 * distance`. With damping at or above critical this is the fastest start that
    /// still reaches the target without crossing it.
    pub fn carry(&mut self, velocity: f64, config: SpringConfig) {
        let distance = self.target - self.position;
        if velocity * distance <= 0.0 {
            self.velocity = 0.0;
            return;
        }
        let cap = 0.5 * config.damping * abs(distance);
        self.velocity = if velocity > cap {
            cap
        } else if velocity < -cap {
            -cap
        } else {
            velocity
        };
    }

    /// Advances by `dt` seconds using fixed semi-implicit Euler substeps.
    pub fn tick(&mut self, dt: f64, config: SpringConfig) {
        let mut remaining = dt.clamp(0.0, MAX_FRAME_SECS);
        while remaining > 0.0 {
            let h = if remaining < STEP_SECS { remaining } else { STEP_SECS };
            let accel =
                -config.stiffness * (self.position - self.target) - config.damping * self.velocity;
            self.velocity += accel * h;
            self.position += self.velocity * h;
            remaining -= h;
        }
    }

    pub fn is_at_rest(&self, epsilon: f64) -> bool {
        abs(self.position - self.target) < epsilon && abs(self.velocity) < epsilon
    }
}

#[inline]
fn abs(x: f64) -> f64 {
    if x < 0.0 { -x } else { x }
}
