use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, HtmlElement, MouseEvent};

use super::dom::{viewport, Listener};
use crate::reveal::{PointerState, RevealMask};

/// Masks `layer` to a circle around the pointer for as long as it lives.
pub struct PointerReveal {
    pointer: Rc<Cell<PointerState>>,
    _mousemove: Listener,
}

impl PointerReveal {
    pub fn pointer(&self) -> PointerState {
        self.pointer.get()
    }
}

fn apply_mask(layer: &HtmlElement, css: &str) -> Result<(), JsValue> {
    let style = layer.style();
    style.set_property("mask-image", css)?;
    style.set_property("-webkit-mask-image", css)
}

pub fn mount(layer: HtmlElement) -> Result<PointerReveal, JsValue> {
    let window = window().ok_or("no window")?;
    let (w, h) = viewport(&window)?;
    let mask = RevealMask::default();
    let pointer = Rc::new(Cell::new(PointerState::centered(w, h)));
    apply_mask(&layer, &mask.css(&pointer.get()))?;

    let mousemove = {
        let pointer = pointer.clone();
        Listener::new(&window, "mousemove", move |event| {
            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let mut state = pointer.get();
            state.move_to(f64::from(event.client_x()), f64::from(event.client_y()));
            pointer.set(state);
            if let Err(err) = apply_mask(&layer, &mask.css(&state)) {
                log::warn!("mask update failed: {err:?}");
            }
        })?
    };

    Ok(PointerReveal {
        pointer,
        _mousemove: mousemove,
    })
}
