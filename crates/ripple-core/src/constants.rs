// Default tuning for the ripple pool and the distortion pass.

// Pool sizing and triggering
pub const DEFAULT_CAPACITY: usize = 100; // waves alive at once
pub const DEFAULT_TRIGGER_DISTANCE: f32 = 5.0; // px of pointer travel per frame to spawn a wave

// Per-frame decay
pub const DEFAULT_ROTATION_STEP: f32 = 0.02; // radians per frame
pub const DEFAULT_OPACITY_FACTOR: f32 = 0.97;
pub const DEFAULT_SCALE_BLEND: f32 = 0.98;
pub const DEFAULT_SCALE_TARGET: f32 = 8.5; // 0.98*s + 0.17 settles at 8.5

// Activation values
pub const DEFAULT_INITIAL_SCALE: f32 = 0.2;
pub const DEFAULT_INITIAL_OPACITY: f32 = 0.5;
pub const DEFAULT_OPACITY_EPSILON: f32 = 0.002;

pub const DEFAULT_ROTATION_SEED: u64 = 0x5EED_0F_A11;

// Distortion pass controls (slider ranges and step)
pub const PROGRESS_MIN: f32 = 0.0;
pub const PROGRESS_MAX: f32 = 1.0;
pub const SCALE_MIN: f32 = 0.0;
pub const SCALE_MAX: f32 = 10.0;
pub const SETTINGS_STEP: f32 = 0.01;
pub const DEFAULT_DISTORTION_SCALE: f32 = 1.0;

// Shader time advance per second (0.01 per frame at 60 Hz)
pub const DISTORTION_TIME_RATE: f32 = 0.6;
