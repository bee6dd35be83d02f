use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;

use crate::dom;
use crate::error::StageError;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Converts `requestAnimationFrame` timestamps into frame deltas.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last: Option<f64>,
}

impl FrameClock {
    /// Longest step a single frame may report, so a backgrounded tab does
    /// not teleport every animation on return.
    pub const MAX_STEP: f64 = 0.1;

    /// Seconds since the previous frame; zero on the first one.
    pub fn step(&mut self, timestamp_ms: f64) -> f64 {
        let dt = match self.last {
            Some(last) => ((timestamp_ms - last) / 1000.0).clamp(0.0, Self::MAX_STEP),
            None => 0.0,
        };
        self.last = Some(timestamp_ms);
        dt
    }
}

/// Runs `on_frame` on every animation frame until dropped.
pub struct FrameLoop {
    callback: FrameCallback,
    pending: Rc<Cell<Option<i32>>>,
}

impl FrameLoop {
    pub fn start<F>(mut on_frame: F) -> Result<Self, StageError>
    where
        F: FnMut(f64) + 'static,
    {
        let callback: FrameCallback = Rc::new(RefCell::new(None));
        let pending = Rc::new(Cell::new(None));

        let callback_for_frame = Rc::clone(&callback);
        let pending_for_frame = Rc::clone(&pending);
        *callback.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
            pending_for_frame.set(None);
            on_frame(timestamp);
            if let Some(cb) = callback_for_frame.borrow().as_ref() {
                match schedule(cb) {
                    Ok(id) => pending_for_frame.set(Some(id)),
                    Err(e) => log::error!("Animation frame loop stopped: {}", e),
                }
            }
        }) as Box<dyn FnMut(f64)>));

        let first = match callback.borrow().as_ref() {
            Some(cb) => schedule(cb)?,
            None => return Err(StageError::Js("frame callback missing".to_string())),
        };
        pending.set(Some(first));
        Ok(Self { callback, pending })
    }
}

fn schedule(cb: &Closure<dyn FnMut(f64)>) -> Result<i32, StageError> {
    Ok(dom::window()?.request_animation_frame(cb.as_ref().unchecked_ref())?)
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        if let (Some(id), Some(window)) = (self.pending.take(), web_sys::window()) {
            if let Err(e) = window.cancel_animation_frame(id) {
                log::warn!("Failed to cancel animation frame: {:?}", e);
            }
        }
        // breaks the closure's reference back to itself
        self.callback.borrow_mut().take();
    }
}
