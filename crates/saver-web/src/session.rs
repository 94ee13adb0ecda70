use anyhow::anyhow;
use glam::Vec2;
use saver_core::RibbonField;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::css;
use crate::dom;
use crate::render;

/// Everything owned by one activation of the effect: the injected
/// cursor-hiding style, the overlay canvas and its 2D context, the simulated
/// field, and the pending animation-frame handle.
pub struct EffectSession {
    style: web::HtmlStyleElement,
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    field: RibbonField,
    started_ms: f64,
    pending_frame: Option<i32>,
}

impl EffectSession {
    /// Create the overlay surface and a freshly seeded field. Nothing is
    /// attached to the DOM unless every fallible step succeeds.
    pub fn begin(seed: u64) -> anyhow::Result<Self> {
        let window = dom::window().ok_or_else(|| anyhow!("no window"))?;
        let document = window.document().ok_or_else(|| anyhow!("no document"))?;
        let (width, height) = dom::viewport_size(&window);

        let canvas: web::HtmlCanvasElement = document
            .create_element("canvas")
            .map_err(|e| anyhow!("create canvas: {e:?}"))?
            .dyn_into()
            .map_err(|_| anyhow!("element is not a canvas"))?;
        canvas.set_width(width);
        canvas.set_height(height);
        let decl = canvas.style();
        for (prop, value) in css::OVERLAY_CANVAS_STYLE {
            _ = decl.set_property(prop, value);
        }

        let ctx: web::CanvasRenderingContext2d = canvas
            .get_context("2d")
            .map_err(|e| anyhow!("get_context threw: {e:?}"))?
            .ok_or_else(|| anyhow!("missing 2d context"))?
            .dyn_into()
            .map_err(|_| anyhow!("context is not 2d"))?;

        let style: web::HtmlStyleElement = document
            .create_element("style")
            .map_err(|e| anyhow!("create style: {e:?}"))?
            .dyn_into()
            .map_err(|_| anyhow!("element is not a style"))?;
        style.set_text_content(Some(css::CURSOR_HIDE_CSS));

        let head = document.head().ok_or_else(|| anyhow!("no <head>"))?;
        let body = document.body().ok_or_else(|| anyhow!("no <body>"))?;
        head.append_child(&style)
            .map_err(|e| anyhow!("inject style: {e:?}"))?;
        if let Err(e) = body.append_child(&canvas) {
            _ = head.remove_child(&style);
            return Err(anyhow!("attach canvas: {e:?}"));
        }

        Ok(Self {
            style,
            canvas,
            ctx,
            field: RibbonField::new(Vec2::new(width as f32, height as f32), seed),
            started_ms: js_sys::Date::now(),
            pending_frame: None,
        })
    }

    pub fn set_pending_frame(&mut self, id: i32) {
        self.pending_frame = Some(id);
    }

    /// One simulation + paint step.
    pub fn frame(&mut self) {
        self.field.advance();
        let elapsed_ms = js_sys::Date::now() - self.started_ms;
        render::paint(&self.ctx, &self.canvas, &self.field, elapsed_ms);
    }

    /// Match the overlay to new viewport dimensions; the field keeps its
    /// points and trails and bounces off the new edges from here on.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        self.field.resize(Vec2::new(width as f32, height as f32));
    }

    /// Cancel the pending frame and detach everything this session injected.
    /// Safe to call repeatedly; removals are skipped once detached.
    pub fn teardown(&mut self) {
        if let Some(id) = self.pending_frame.take() {
            if let Some(window) = dom::window() {
                _ = window.cancel_animation_frame(id);
            }
        }
        if let Some(parent) = self.style.parent_node() {
            _ = parent.remove_child(&self.style);
        }
        if let Some(parent) = self.canvas.parent_node() {
            _ = parent.remove_child(&self.canvas);
        }
    }
}

/// Seed material for a fresh activation, so palettes differ between runs.
pub(crate) fn fresh_seed() -> u64 {
    let scrambled = (js_sys::Math::random() * (1u64 << 53) as f64) as u64;
    scrambled ^ js_sys::Date::now() as u64
}
