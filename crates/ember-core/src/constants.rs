// Tuning constants shared by every scene preset. Per-variant values live in
// `config.rs`.

// Pointer
pub const POINTER_MIN_INTERVAL_MS: f64 = 16.0; // ~60fps cap on accepted moves

// Frame integration
pub const FRAME_DT_MAX_SEC: f32 = 0.1; // clamp after tab switches or long stalls

// Backdrop glow placement (fractions of the canvas size)
pub const GLOW_CENTER_X: f32 = 0.5;
pub const GLOW_CENTER_Y: f32 = 0.45; // slightly above center
pub const GLOW_FOLLOW_X: f32 = 0.06; // how far the light follows the pointer
pub const GLOW_FOLLOW_Y: f32 = 0.04;
pub const GLOW_RADIUS_FRACTION: f32 = 0.6; // of max(W, H)
pub const GLOW_MID_STOP: f32 = 0.35;

// Blob gradient shape
pub const BLOB_MID_STOP: f32 = 0.6;
pub const BLOB_MID_ALPHA_RATIO: f32 = 0.18;
pub const BLOB_RADIUS_SPREAD: f32 = 0.4; // radius varies by +-40% around the base

// Lightning bolts
pub const LIGHTNING_MIN_BOLTS: usize = 2;
pub const LIGHTNING_MAX_BOLTS: usize = 4;
pub const LIGHTNING_DEPTH_FRACTION: f32 = 0.45; // bolts stay in the upper part
pub const LIGHTNING_LINE_WIDTH: f32 = 1.6;

// Mist links
pub const MIST_LINE_WIDTH: f32 = 1.0;

// Toast
pub const TOAST_DEFAULT_MS: u32 = 1800;

// Ambience
pub const AMBIENCE_VOLUME: f64 = 0.35;

// Text effects
pub const TYPEWRITER_CHAR_MS: f64 = 45.0;
pub const TYPEWRITER_PUNCT_PAUSE_MS: f64 = 260.0;
pub const GLITCH_PROBABILITY: f32 = 0.015; // per frame
pub const GLITCH_BURST_MS: f64 = 140.0;
pub const GLITCH_MAX_FRACTION: f32 = 0.3;
pub const GLITCH_GLYPHS: &[char] = &[
    '#', '%', '&', '*', '+', '=', '/', '\\', '<', '>', '?', '!', '@', '$', '_', '~',
];
