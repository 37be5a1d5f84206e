use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsValue;
use web_sys::{window, HtmlCanvasElement, Window};

use super::canvas::CanvasSurface;
use super::dom::{viewport, Listener};
use super::frame::FrameLoop;
use crate::config::BackgroundConfig;
use crate::random::MathRandom;
use crate::simulator::BackgroundSimulator;

/// The running blob background. Dropping it stops the frame loop and detaches
/// the resize listener.
pub struct BackgroundLayer {
    simulator: Rc<RefCell<BackgroundSimulator<MathRandom>>>,
    _resize: Listener,
    frames: FrameLoop,
}

impl BackgroundLayer {
    pub fn particle_count(&self) -> usize {
        self.simulator.borrow().particles().len()
    }

    pub fn is_running(&self) -> bool {
        self.frames.is_scheduled()
    }
}

/// Start the render loop on `canvas`. Returns `None` without a 2D context.
pub fn start(canvas: HtmlCanvasElement) -> Result<Option<BackgroundLayer>, JsValue> {
    let Some(mut surface) = CanvasSurface::new(&canvas) else {
        log::warn!("canvas has no 2d context; background stays static");
        return Ok(None);
    };
    let window = window().ok_or("no window")?;

    let simulator = Rc::new(RefCell::new(BackgroundSimulator::new(
        BackgroundConfig::default(),
        MathRandom,
    )));

    // Resize canvas to fit window and reseed the field
    let fit = {
        let canvas = canvas.clone();
        let simulator = simulator.clone();
        move |window: &Window| -> Result<(), JsValue> {
            let (w, h) = viewport(window)?;
            canvas.set_width(w as u32);
            canvas.set_height(h as u32);
            simulator.borrow_mut().setup(w, h);
            Ok(())
        }
    };
    fit(&window)?;

    let resize = {
        let target = window.clone();
        Listener::new(&window, "resize", move |_| {
            if let Err(err) = fit(&target) {
                log::warn!("resize ignored: {err:?}");
            }
        })?
    };

    // Animation loop
    let frames = {
        let simulator = simulator.clone();
        FrameLoop::start(move |_| {
            simulator.borrow_mut().render_frame(&mut surface);
            true
        })?
    };

    log::info!("background running");
    Ok(Some(BackgroundLayer {
        simulator,
        _resize: resize,
        frames,
    }))
}
