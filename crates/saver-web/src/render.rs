use saver_core::constants::LINE_WIDTH;
use saver_core::RibbonField;
use web_sys as web;

use crate::css;

/// Clear the canvas and stroke every ribbon slice for this frame, oldest
/// slices first so newer ones layer on top.
pub fn paint(
    ctx: &web::CanvasRenderingContext2d,
    canvas: &web::HtmlCanvasElement,
    field: &RibbonField,
    elapsed_ms: f64,
) {
    ctx.clear_rect(0.0, 0.0, f64::from(canvas.width()), f64::from(canvas.height()));
    ctx.set_line_width(LINE_WIDTH);
    for stroke in field.strokes(elapsed_ms) {
        ctx.set_stroke_style_str(&css::hsla(stroke.hue, stroke.alpha));
        ctx.begin_path();
        ctx.move_to(f64::from(stroke.start.x), f64::from(stroke.start.y));
        for seg in &stroke.segments {
            ctx.quadratic_curve_to(
                f64::from(seg.ctrl.x),
                f64::from(seg.ctrl.y),
                f64::from(seg.end.x),
                f64::from(seg.end.y),
            );
        }
        ctx.close_path();
        ctx.stroke();
    }
}
