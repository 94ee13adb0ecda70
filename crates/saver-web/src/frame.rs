use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::controller::Controller;

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Self-rescheduling `requestAnimationFrame` loop. Built once at startup;
/// each activation kicks it, and it stops on its own the moment the session
/// is gone. Teardown additionally cancels the pending handle.
pub struct FrameLoop {
    tick: TickSlot,
}

impl FrameLoop {
    pub fn new(ctl: Rc<RefCell<Controller>>) -> Self {
        let tick: TickSlot = Rc::new(RefCell::new(None));
        let tick_next = tick.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            let mut c = ctl.borrow_mut();
            if !c.advance_frame() {
                return; // session gone; do not reschedule
            }
            if let Some(id) = request_frame(&tick_next) {
                c.note_pending_frame(id);
            }
        }) as Box<dyn FnMut()>));
        Self { tick }
    }

    /// Request the first frame of a fresh session.
    pub fn kick(&self) -> Option<i32> {
        request_frame(&self.tick)
    }
}

fn request_frame(tick: &TickSlot) -> Option<i32> {
    let window = web::window()?;
    let slot = tick.borrow();
    let closure = slot.as_ref()?;
    window
        .request_animation_frame(closure.as_ref().unchecked_ref())
        .ok()
}
