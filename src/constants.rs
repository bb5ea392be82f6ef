// Visual and interaction tuning for the web front end.
//
// Pool decay and distortion ranges live in `ripple_core::constants`; the
// values here only concern how the effect is drawn and driven.

// Ripple layer
pub const BRUSH_SIZE_PX: f32 = 64.0; // quad edge at scale 1, CSS px
pub const RIPPLE_DISPLACEMENT: f32 = 0.08; // max UV offset from a saturated ripple

// Scene camera (perspective, looking down -Z at the plane row)
pub const CAMERA_FOV_DEG: f32 = 45.0;
pub const CAMERA_Z: f32 = 2.0;

// Scene planes
pub const PLANE_COUNT: usize = 3;
pub const PLANE_SIZE: [f32; 2] = [0.95, 0.5];
pub const PLANE_SPACING: f32 = 1.0; // centers at x = -1, 0, 1
pub const NOISE_FREQ: f32 = 3.5;
pub const NOISE_AMP: f32 = 0.15;

// Background
pub const CLEAR_RGB: [f64; 3] = [0.067, 0.067, 0.067]; // #111111

// Keyboard nudges for the distortion controls
pub const KEY_STEP_FINE: f32 = 0.01;
pub const KEY_STEP_COARSE: f32 = 0.1;

// Frame pacing
pub const MAX_FRAME_DT_SEC: f32 = 0.1; // clamp after tab switches
