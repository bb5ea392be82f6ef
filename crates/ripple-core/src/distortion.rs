//! Parameters of the full-screen distortion pass.
//!
//! `progress` blends the scene UV toward a flowing domain-warped pattern and
//! `scale` sets the pattern frequency. [`DistortionSettings::warp_uv`] mirrors
//! the WGSL in `shaders/post.wgsl` so the mapping can be checked on the host.

use crate::constants::*;
use glam::Vec2;
use std::f32::consts::FRAC_PI_2;

// (amplitude, frequency, speed, phase) per warp octave
const WARP_OCTAVES: [(f32, f32, f32, [f32; 2]); 4] = [
    (0.1, 3.0, 1.0, [1.2, 3.4]),
    (0.1, 2.7, 1.4, [2.2, 3.4]),
    (0.1, 5.0, 2.6, [4.2, 1.4]),
    (0.3, 7.0, 3.6, [10.2, 3.4]),
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DistortionSettings {
    progress: f32,
    scale: f32,
    time: f32,
}

impl Default for DistortionSettings {
    fn default() -> Self {
        Self {
            progress: PROGRESS_MIN,
            scale: DEFAULT_DISTORTION_SCALE,
            time: 0.0,
        }
    }
}

impl DistortionSettings {
    #[inline]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    #[inline]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    #[inline]
    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn set_progress(&mut self, value: f32) {
        self.progress = snap(value, PROGRESS_MIN, PROGRESS_MAX, self.progress);
    }

    pub fn set_scale(&mut self, value: f32) {
        self.scale = snap(value, SCALE_MIN, SCALE_MAX, self.scale);
    }

    pub fn nudge_progress(&mut self, delta: f32) {
        self.set_progress(self.progress + delta);
    }

    pub fn nudge_scale(&mut self, delta: f32) {
        self.set_scale(self.scale + delta);
    }

    /// Restore slider values; time keeps running.
    pub fn reset(&mut self) {
        let time = self.time;
        *self = Self {
            time,
            ..Self::default()
        };
    }

    pub fn advance(&mut self, dt_sec: f32) {
        self.time += dt_sec.max(0.0) * DISTORTION_TIME_RATE;
    }

    /// Z rotation applied to the scene planes.
    #[inline]
    pub fn plane_rotation(&self) -> f32 {
        self.progress * FRAC_PI_2
    }

    pub fn warp_uv(&self, uv: Vec2) -> Vec2 {
        let mut p = uv * 2.0 - Vec2::ONE;
        for (amp, freq, speed, phase) in WARP_OCTAVES {
            let arg = self.scale * freq * Vec2::new(p.y, p.x)
                + Vec2::splat(speed * self.time)
                + Vec2::from(phase);
            p += amp * Vec2::new(arg.x.cos(), arg.y.cos());
        }
        Vec2::new(
            lerp(uv.x, p.length(), self.progress),
            lerp(uv.y, 0.5, self.progress),
        )
    }
}

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

// Clamp to the slider range and round to its step; NaN leaves the value as is.
fn snap(value: f32, min: f32, max: f32, fallback: f32) -> f32 {
    if value.is_nan() {
        return fallback;
    }
    let stepped = (value / SETTINGS_STEP).round() * SETTINGS_STEP;
    stepped.clamp(min, max)
}
