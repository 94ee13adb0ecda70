#![cfg(target_arch = "wasm32")]

//! WASM entry point: arms the idle countdown and wires the activity
//! listeners when the module loads. Everything the running effect owns lives
//! in [`session::EffectSession`]; the simulation itself is `saver-core`.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys as web;

mod controller;
mod css;
mod dom;
mod events;
mod frame;
mod render;
mod session;
mod timer;

use controller::Controller;
use frame::FrameLoop;
use timer::IdleTimer;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("saver-web starting");

    if let Err(e) = init() {
        log::error!("init error: {e:?}");
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let controller = Rc::new(RefCell::new(Controller::new(js_sys::Date::now())));

    // The countdown and frame-loop closures both need the shared controller
    // handle, so they are built here and handed back to it.
    let timer = {
        let ctl = controller.clone();
        IdleTimer::new(window.clone(), move || ctl.borrow_mut().on_idle_timeout())
    };
    let frames = FrameLoop::new(controller.clone());
    {
        let mut ctl = controller.borrow_mut();
        ctl.attach(timer, frames);
        // Page load counts as activity: arms the first countdown.
        ctl.record_activity();
    }

    events::wire_activity_listeners(&window, &controller);
    events::wire_resize(&window, &controller);
    Ok(())
}
