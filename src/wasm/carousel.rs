use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsValue;
use web_sys::{Document, Element, HtmlElement};

use super::dom::{query_in, Listener};
use crate::carousel::Carousel;
use crate::content::{MediaKind, CAROUSEL_ITEMS};

pub struct CarouselPanel {
    carousel: Rc<RefCell<Carousel>>,
    _buttons: Vec<Listener>,
}

impl CarouselPanel {
    pub fn index(&self) -> usize {
        self.carousel.borrow().index()
    }
}

fn slide(document: &Document, kind: MediaKind, src: &str) -> Result<Element, JsValue> {
    let el = match kind {
        MediaKind::Video => {
            let video = document.create_element("video")?;
            for flag in ["autoplay", "loop", "muted", "playsinline"] {
                video.set_attribute(flag, "")?;
            }
            video
        }
        MediaKind::Image => document.create_element("img")?,
    };
    el.set_attribute("src", src)?;
    el.set_attribute("data-slide", "")?;
    Ok(el)
}

/// The track spans every slide, so one slide is `100 / len` percent of it.
fn show(track: &HtmlElement, carousel: &Carousel) {
    let offset = if carousel.is_empty() {
        0.0
    } else {
        carousel.index() as f64 * 100.0 / carousel.len() as f64
    };
    if let Err(err) = track
        .style()
        .set_property("transform", &format!("translateX(-{offset}%)"))
    {
        log::warn!("carousel move failed: {err:?}");
    }
}

/// Bind the looping carousel inside `root`, filling an empty track with the
/// showcase media.
pub fn mount(document: &Document, root: &Element) -> Result<Option<CarouselPanel>, JsValue> {
    let Some(track) = query_in(root, "[data-carousel-track]") else {
        return Ok(None);
    };
    if track.child_element_count() == 0 {
        for item in &CAROUSEL_ITEMS {
            track.append_child(&slide(document, item.kind, item.src)?)?;
        }
    }

    let carousel = Rc::new(RefCell::new(Carousel::new(track.child_element_count() as usize)));
    show(&track, &carousel.borrow());

    let mut buttons = Vec::new();
    let steps: [(&str, fn(&mut Carousel) -> usize); 2] = [
        ("[data-carousel-prev]", Carousel::previous),
        ("[data-carousel-next]", Carousel::next),
    ];
    for (selector, step) in steps {
        let Some(button) = query_in(root, selector) else {
            continue;
        };
        let carousel = carousel.clone();
        let track = track.clone();
        buttons.push(Listener::new(&button, "click", move |_| {
            step(&mut carousel.borrow_mut());
            show(&track, &carousel.borrow());
        })?);
    }

    Ok(Some(CarouselPanel {
        carousel,
        _buttons: buttons,
    }))
}
