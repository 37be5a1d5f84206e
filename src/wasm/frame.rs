use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::window;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// A self-rescheduling `requestAnimationFrame` loop.
///
/// The tick gets the frame timestamp in milliseconds and returns whether to
/// keep going. Dropping the loop cancels the pending frame, so it never
/// outlives its owner.
pub struct FrameLoop {
    request_id: Rc<Cell<Option<i32>>>,
    callback: FrameCallback,
}

impl FrameLoop {
    pub fn start<F>(mut tick: F) -> Result<Self, JsValue>
    where
        F: FnMut(f64) -> bool + 'static,
    {
        let window = window().ok_or("no window")?;
        let request_id = Rc::new(Cell::new(None));

        // `f` holds the animation-frame closure so that we can keep calling
        // `request_animation_frame` recursively. Storing it inside an `Option`
        // allows us to create the `Closure` first and then obtain a reference
        // to it from within itself.
        let f: FrameCallback = Rc::new(RefCell::new(None));
        let g = f.clone();
        let id = request_id.clone();
        let w = window.clone();
        *g.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
            id.set(None);
            if !tick(timestamp) {
                return;
            }

            // schedule next
            if let Some(callback) = f.borrow().as_ref() {
                match w.request_animation_frame(callback.as_ref().unchecked_ref()) {
                    Ok(next) => id.set(Some(next)),
                    Err(err) => log::warn!("frame loop stopped: {err:?}"),
                }
            }
        }) as Box<dyn FnMut(f64)>));

        let first = match g.borrow().as_ref() {
            Some(callback) => window.request_animation_frame(callback.as_ref().unchecked_ref())?,
            None => return Err("frame callback missing".into()),
        };
        request_id.set(Some(first));

        Ok(Self {
            request_id,
            callback: g,
        })
    }

    pub fn is_scheduled(&self) -> bool {
        self.request_id.get().is_some()
    }

    pub fn cancel(&self) {
        if let Some(id) = self.request_id.take() {
            if let Some(window) = window() {
                if let Err(err) = window.cancel_animation_frame(id) {
                    log::warn!("cancelling frame {id} failed: {err:?}");
                }
            }
        }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.cancel();
        // Break the closure's reference to itself.
        self.callback.borrow_mut().take();
    }
}

/// Turns frame timestamps into deltas in seconds. The first frame is zero.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameClock {
    last: Option<f64>,
}

impl FrameClock {
    pub fn delta(&mut self, timestamp_ms: f64) -> f64 {
        let dt = self
            .last
            .map_or(0.0, |last| (timestamp_ms - last) / 1000.0);
        self.last = Some(timestamp_ms);
        dt.max(0.0)
    }
}
