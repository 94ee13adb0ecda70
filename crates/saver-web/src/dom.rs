use web_sys as web;

#[inline]
pub fn window() -> Option<web::Window> {
    web::window()
}

/// Current viewport in CSS pixels, clamped to at least 1x1.
pub fn viewport_size(window: &web::Window) -> (u32, u32) {
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1.0);
    (width.max(1.0) as u32, height.max(1.0) as u32)
}
