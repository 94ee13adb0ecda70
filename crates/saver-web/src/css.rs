//! Pure style strings, kept platform-free so host-side tests can cover them.

use saver_core::constants::{STROKE_LIGHTNESS, STROKE_SATURATION};

/// Injected while the effect is active; forces the pointer hidden everywhere.
pub const CURSOR_HIDE_CSS: &str = "* { cursor: none !important; }";

/// Inline style applied to the overlay canvas: full-viewport, above all other
/// content, invisible to hit-testing.
pub const OVERLAY_CANVAS_STYLE: [(&str, &str); 6] = [
    ("position", "fixed"),
    ("top", "0"),
    ("left", "0"),
    ("z-index", "9999"),
    ("pointer-events", "none"),
    ("background-color", "transparent"),
];

/// CSS color for one ribbon slice.
pub fn hsla(hue: f32, alpha: f32) -> String {
    format!("hsla({hue:.1}, {STROKE_SATURATION}%, {STROKE_LIGHTNESS}%, {alpha:.3})")
}
