use saver_core::constants::IDLE_TIME_LIMIT_MS;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Owns the `setTimeout` countdown behind the idle monitor. Restarting
/// clears the previous handle first, so at most one timeout is ever pending.
pub struct IdleTimer {
    window: web::Window,
    callback: Closure<dyn FnMut()>,
    pending: Option<i32>,
}

impl IdleTimer {
    pub fn new(window: web::Window, on_timeout: impl FnMut() + 'static) -> Self {
        Self {
            window,
            callback: Closure::wrap(Box::new(on_timeout) as Box<dyn FnMut()>),
            pending: None,
        }
    }

    /// Restart the countdown from the full idle limit.
    pub fn restart(&mut self) {
        self.clear();
        self.pending = self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                self.callback.as_ref().unchecked_ref(),
                IDLE_TIME_LIMIT_MS as i32,
            )
            .ok();
    }

    pub fn clear(&mut self) {
        // Clearing an already-fired handle is a harmless no-op.
        if let Some(id) = self.pending.take() {
            self.window.clear_timeout_with_handle(id);
        }
    }
}
