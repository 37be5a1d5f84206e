use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlButtonElement, HtmlElement};

use super::dom::{apply, query_in, Listener};
use super::frame::{FrameClock, FrameLoop};
use crate::generation::{DemoLayer, GenerationDemo, GenerationState};

struct Elements {
    scanline: Option<HtmlElement>,
    raw: Option<HtmlElement>,
    generated: Option<HtmlElement>,
    button: HtmlButtonElement,
    readout: Option<HtmlElement>,
}

impl Elements {
    fn layer(&self, layer: DemoLayer) -> Option<&HtmlElement> {
        match layer {
            DemoLayer::Scanline => self.scanline.as_ref(),
            DemoLayer::RawImage => self.raw.as_ref(),
            DemoLayer::GeneratedImage => self.generated.as_ref(),
        }
    }

    fn sync(&self, demo: &GenerationDemo) {
        for (layer, property, value) in demo.values() {
            let Some(element) = self.layer(layer) else {
                continue;
            };
            if let Err(err) = apply(element, property, value) {
                log::warn!("demo style for {layer:?} failed: {err:?}");
            }
        }

        self.button.set_disabled(!demo.trigger_enabled());
        self.button.set_text_content(Some(demo.button_label()));
        if let Some(readout) = &self.readout {
            readout.set_text_content(demo.render_time());
            readout.set_hidden(demo.render_time().is_none());
        }
    }
}

/// The before/after render demo bound to its markup.
pub struct GenerationPanel {
    demo: Rc<RefCell<GenerationDemo>>,
    frames: Rc<RefCell<Option<FrameLoop>>>,
    _click: Listener,
}

impl GenerationPanel {
    pub fn state(&self) -> GenerationState {
        self.demo.borrow().state()
    }
}

/// Wire the demo inside `root`. Returns `None` when there is no
/// `[data-generate]` button to drive it.
pub fn mount(root: &Element) -> Result<Option<GenerationPanel>, JsValue> {
    let Some(button) = query_in(root, "[data-generate]")
        .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok())
    else {
        log::warn!("generation demo has no trigger button");
        return Ok(None);
    };

    let elements = Rc::new(Elements {
        scanline: query_in(root, "[data-layer=scanline]"),
        raw: query_in(root, "[data-layer=raw]"),
        generated: query_in(root, "[data-layer=generated]"),
        button: button.clone(),
        readout: query_in(root, "[data-render-time]"),
    });
    let demo = Rc::new(RefCell::new(GenerationDemo::default()));
    elements.sync(&demo.borrow());

    let frames: Rc<RefCell<Option<FrameLoop>>> = Rc::new(RefCell::new(None));

    let click = {
        let demo = demo.clone();
        let frames = frames.clone();
        Listener::new(&button, "click", move |_| {
            if !demo.borrow_mut().start() {
                return;
            }
            elements.sync(&demo.borrow());

            let tick = {
                let demo = demo.clone();
                let elements = elements.clone();
                let mut clock = FrameClock::default();
                move |timestamp| {
                    let state = demo.borrow_mut().advance(clock.delta(timestamp));
                    elements.sync(&demo.borrow());
                    state == GenerationState::Processing
                }
            };
            match FrameLoop::start(tick) {
                Ok(frame_loop) => *frames.borrow_mut() = Some(frame_loop),
                Err(err) => log::warn!("demo timeline not scheduled: {err:?}"),
            }
        })?
    };

    Ok(Some(GenerationPanel {
        demo,
        frames,
        _click: click,
    }))
}

impl Drop for GenerationPanel {
    fn drop(&mut self) {
        self.frames.borrow_mut().take();
    }
}
