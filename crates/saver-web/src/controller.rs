use saver_core::IdleMonitor;

use crate::dom;
use crate::frame::FrameLoop;
use crate::session::{fresh_seed, EffectSession};
use crate::timer::IdleTimer;

/// Owns the idle state machine, the countdown timer, the frame loop, and the
/// active session (if any). This is the only place the effect is started or
/// stopped from.
pub struct Controller {
    monitor: IdleMonitor,
    timer: Option<IdleTimer>,
    frames: Option<FrameLoop>,
    session: Option<EffectSession>,
}

impl Controller {
    pub fn new(now_ms: f64) -> Self {
        Self {
            monitor: IdleMonitor::new(now_ms),
            timer: None,
            frames: None,
            session: None,
        }
    }

    /// Late-bound: the timer and frame-loop closures need the shared
    /// controller handle before the controller can own them.
    pub fn attach(&mut self, timer: IdleTimer, frames: FrameLoop) {
        self.timer = Some(timer);
        self.frames = Some(frames);
    }

    /// Any recognized input signal: dismiss a running session immediately,
    /// then restart the countdown from the full idle limit.
    pub fn record_activity(&mut self) {
        if self.monitor.record_activity(js_sys::Date::now()) {
            if let Some(mut session) = self.session.take() {
                session.teardown();
            }
            log::debug!("activity detected, ribbons off");
        }
        if let Some(timer) = self.timer.as_mut() {
            timer.restart();
        }
    }

    /// The countdown elapsed with no activity: bring up the overlay and start
    /// the frame loop. If the surface cannot be created the effect silently
    /// stays off until the next timeout.
    pub fn on_idle_timeout(&mut self) {
        if !self.monitor.timeout_fired() {
            return;
        }
        match EffectSession::begin(fresh_seed()) {
            Ok(mut session) => {
                if let Some(id) = self.frames.as_ref().and_then(FrameLoop::kick) {
                    session.set_pending_frame(id);
                }
                self.session = Some(session);
                log::info!("idle limit reached, ribbons on");
            }
            Err(e) => {
                log::warn!("ribbon overlay could not start: {e:#}");
                self.monitor.activation_failed(js_sys::Date::now());
                if let Some(timer) = self.timer.as_mut() {
                    timer.restart();
                }
            }
        }
    }

    /// One frame-loop step. Returns `false` once the session is gone so the
    /// loop stops rescheduling itself.
    pub fn advance_frame(&mut self) -> bool {
        match self.session.as_mut() {
            Some(session) => {
                session.frame();
                true
            }
            None => false,
        }
    }

    pub fn note_pending_frame(&mut self, id: i32) {
        if let Some(session) = self.session.as_mut() {
            session.set_pending_frame(id);
        }
    }

    /// Viewport changed: while active, match the surface to the new
    /// dimensions. Points and trails are kept; the countdown is not touched.
    pub fn viewport_resized(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if let Some(window) = dom::window() {
            let (width, height) = dom::viewport_size(&window);
            session.resize(width, height);
        }
    }
}
