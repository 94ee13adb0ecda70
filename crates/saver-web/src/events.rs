use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::controller::Controller;

/// Window-level signals that count as user activity. Captured so they are
/// seen even when a target stops propagation.
pub const ACTIVITY_EVENTS: [&str; 5] =
    ["pointermove", "pointerdown", "keydown", "scroll", "touchstart"];

pub fn wire_activity_listeners(window: &web::Window, ctl: &Rc<RefCell<Controller>>) {
    for name in ACTIVITY_EVENTS {
        let ctl = ctl.clone();
        let closure = Closure::wrap(Box::new(move |_ev: web::Event| {
            ctl.borrow_mut().record_activity();
        }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback_and_bool(
            name,
            closure.as_ref().unchecked_ref(),
            true,
        );
        closure.forget();
    }
}

/// Resize adjusts the active surface only; it does not reset idleness.
pub fn wire_resize(window: &web::Window, ctl: &Rc<RefCell<Controller>>) {
    let ctl = ctl.clone();
    let closure = Closure::wrap(Box::new(move || {
        ctl.borrow_mut().viewport_resized();
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    closure.forget();
}
