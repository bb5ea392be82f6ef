//! Construction parameters for [`RipplePool`](crate::RipplePool).
//!
//! Every field is required at construction; [`RippleConfig::default`] carries
//! the tuning used by the web demo and the `with_*` methods adjust single
//! values on top of it. [`RippleConfig::validate`] is the only place a
//! configuration can be rejected.

use crate::constants::*;
use crate::error::RippleError;

/// Per-frame decay applied to every active wave.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DecayParams {
    /// Radians added to `rotation` each frame.
    pub rotation_step: f32,
    /// Multiplier applied to `opacity` each frame, in (0, 1).
    pub opacity_factor: f32,
    /// Blend pulling `scale` toward `scale_target`, in (0, 1):
    /// `scale' = blend * scale + (1 - blend) * target`.
    pub scale_blend: f32,
    /// Asymptote the scale settles at.
    pub scale_target: f32,
}

impl Default for DecayParams {
    fn default() -> Self {
        Self {
            rotation_step: DEFAULT_ROTATION_STEP,
            opacity_factor: DEFAULT_OPACITY_FACTOR,
            scale_blend: DEFAULT_SCALE_BLEND,
            scale_target: DEFAULT_SCALE_TARGET,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RippleConfig {
    pub capacity: usize,
    /// Minimum pointer displacement between two samples that spawns a wave.
    pub trigger_distance: f32,
    pub decay: DecayParams,
    pub initial_scale: f32,
    pub initial_opacity: f32,
    /// Waves fading below this opacity are deactivated.
    pub opacity_epsilon: f32,
    /// Seed for the initial per-wave rotation.
    pub rotation_seed: u64,
}

impl Default for RippleConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            trigger_distance: DEFAULT_TRIGGER_DISTANCE,
            decay: DecayParams::default(),
            initial_scale: DEFAULT_INITIAL_SCALE,
            initial_opacity: DEFAULT_INITIAL_OPACITY,
            opacity_epsilon: DEFAULT_OPACITY_EPSILON,
            rotation_seed: DEFAULT_ROTATION_SEED,
        }
    }
}

impl RippleConfig {
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn with_trigger_distance(mut self, distance: f32) -> Self {
        self.trigger_distance = distance;
        self
    }

    pub fn with_decay(mut self, decay: DecayParams) -> Self {
        self.decay = decay;
        self
    }

    pub fn with_initial(mut self, scale: f32, opacity: f32) -> Self {
        self.initial_scale = scale;
        self.initial_opacity = opacity;
        self
    }

    pub fn with_opacity_epsilon(mut self, epsilon: f32) -> Self {
        self.opacity_epsilon = epsilon;
        self
    }

    pub fn with_rotation_seed(mut self, seed: u64) -> Self {
        self.rotation_seed = seed;
        self
    }

    /// Check every parameter against its domain.
    ///
    /// NaN fails every check, so it is rejected wherever it appears.
    pub fn validate(&self) -> Result<(), RippleError> {
        if self.capacity == 0 {
            return Err(RippleError::invalid("capacity", "must be at least 1"));
        }
        if !(self.trigger_distance > 0.0 && self.trigger_distance.is_finite()) {
            return Err(RippleError::invalid(
                "trigger_distance",
                format!("must be finite and > 0, got {}", self.trigger_distance),
            ));
        }
        if !self.decay.rotation_step.is_finite() {
            return Err(RippleError::invalid(
                "decay.rotation_step",
                format!("must be finite, got {}", self.decay.rotation_step),
            ));
        }
        check_open_unit("decay.opacity_factor", self.decay.opacity_factor)?;
        check_open_unit("decay.scale_blend", self.decay.scale_blend)?;
        if !self.decay.scale_target.is_finite() {
            return Err(RippleError::invalid(
                "decay.scale_target",
                format!("must be finite, got {}", self.decay.scale_target),
            ));
        }
        if !(self.initial_scale >= 0.0 && self.initial_scale.is_finite()) {
            return Err(RippleError::invalid(
                "initial_scale",
                format!("must be finite and >= 0, got {}", self.initial_scale),
            ));
        }
        if !(self.initial_opacity > 0.0 && self.initial_opacity <= 1.0) {
            return Err(RippleError::invalid(
                "initial_opacity",
                format!("must be in (0, 1], got {}", self.initial_opacity),
            ));
        }
        if !(self.opacity_epsilon > 0.0 && self.opacity_epsilon.is_finite()) {
            return Err(RippleError::invalid(
                "opacity_epsilon",
                format!("must be finite and > 0, got {}", self.opacity_epsilon),
            ));
        }
        Ok(())
    }
}

#[inline]
fn check_open_unit(field: &'static str, value: f32) -> Result<(), RippleError> {
    if value > 0.0 && value < 1.0 {
        Ok(())
    } else {
        Err(RippleError::invalid(
            field,
            format!("must be in (0, 1), got {value}"),
        ))
    }
}
