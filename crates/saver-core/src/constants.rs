// Shared tuning constants used by both the core simulation and the web frontend.

// Idle detection
pub const IDLE_TIME_LIMIT_MS: u32 = 5 * 60 * 1000;

// Ribbon field shape
pub const GROUP_COUNT: usize = 3; // independent closed ribbons
pub const NUM_POINTS: usize = 4; // control points per ribbon
pub const RIBBON_WIDTH: usize = 30; // trail entries kept per point

// Point motion
pub const MIN_SPEED: f32 = 2.0; // px per frame, floor so motion never stalls
pub const MAX_SPEED: f32 = 5.0; // px per frame, ceiling
pub const NOISE_SCALE: f32 = 0.15; // heading random-walk step per frame
pub const HEADING_ACCEL: f32 = 0.2; // acceleration along the heading per frame

// Stroke appearance
pub const LINE_WIDTH: f64 = 2.0;
pub const TRAIL_MAX_OPACITY: f32 = 0.5; // alpha of the newest trail slice
pub const STROKE_SATURATION: f32 = 80.0; // percent
pub const STROKE_LIGHTNESS: f32 = 60.0; // percent
pub const HUE_DRIFT_DIVISOR_MS: f64 = 60.0; // 1 degree of hue drift per 60ms
pub const HUE_DEPTH_STEP: f32 = 2.0; // degrees of hue per trail depth
