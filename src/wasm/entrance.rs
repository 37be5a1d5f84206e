use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Array;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, Window,
};

use super::dom::{apply, viewport, Listener, SavedStyle};
use super::frame::{FrameClock, FrameLoop};
use crate::config::EntranceConfig;
use crate::entrance::{EntranceController, EntranceTarget};
use crate::timeline::Property;

const INDEX_ATTR: &str = "data-reveal-index";

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

struct Targets {
    hero: Vec<HtmlElement>,
    sections: Vec<HtmlElement>,
}

impl Targets {
    fn get(&self, target: EntranceTarget) -> Option<&HtmlElement> {
        match target {
            EntranceTarget::HeroLine(i) => self.hero.get(i),
            EntranceTarget::Section(i) => self.sections.get(i),
        }
    }

    fn sync(&self, controller: &EntranceController) {
        for (target, property, value) in controller.values() {
            let Some(element) = self.get(target) else {
                continue;
            };
            if let Err(err) = apply(element, property, value) {
                log::warn!("entrance style for {target:?} failed: {err:?}");
            }
        }
    }

    /// Fire every unfired section whose top has reached the trigger line.
    fn sweep(&self, controller: &RefCell<EntranceController>, window: &Window) {
        let Ok((_, height)) = viewport(window) else {
            return;
        };
        let mut ctl = controller.borrow_mut();
        for (index, section) in self.sections.iter().enumerate() {
            if ctl.section_fired(index) {
                continue;
            }
            let top = section.get_bounding_client_rect().top();
            if ctl.crosses_start(top, height) {
                ctl.section_visible(index);
            }
        }
    }
}

/// Hero entrance plus fire-once section reveals. Dropping it puts every
/// element's inline style back the way it was found.
pub struct EntranceLayer {
    controller: Rc<RefCell<EntranceController>>,
    saved: Vec<SavedStyle>,
    observer: Option<IntersectionObserver>,
    _on_intersect: Option<ObserverCallback>,
    _on_scroll: Option<Listener>,
    frames: Option<FrameLoop>,
}

impl EntranceLayer {
    pub fn section_fired(&self, index: usize) -> bool {
        self.controller.borrow().section_fired(index)
    }
}

pub fn mount(hero: Vec<HtmlElement>, sections: Vec<HtmlElement>) -> Result<EntranceLayer, JsValue> {
    let window = web_sys::window().ok_or("no window")?;
    let config = EntranceConfig::default();
    let controller = Rc::new(RefCell::new(EntranceController::new(
        config,
        hero.len(),
        sections.len(),
    )));

    let animated = [Property::Opacity, Property::TranslateY];
    let saved = hero
        .iter()
        .chain(sections.iter())
        .map(|el| SavedStyle::capture(el, &animated))
        .collect();

    for (i, section) in sections.iter().enumerate() {
        section.set_attribute(INDEX_ATTR, &i.to_string())?;
    }

    let targets = Rc::new(Targets { hero, sections });
    targets.sync(&controller.borrow());

    // Sections already scrolled past fire straight away.
    targets.sweep(&controller, &window);

    let (observer, on_intersect, on_scroll) = if targets.sections.is_empty() {
        (None, None, None)
    } else {
        let callback: ObserverCallback = {
            let controller = controller.clone();
            let window = window.clone();
            Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
                let Ok((_, height)) = viewport(&window) else {
                    return;
                };
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    let section = entry.target();
                    let Some(index) = section
                        .get_attribute(INDEX_ATTR)
                        .and_then(|v| v.parse::<usize>().ok())
                    else {
                        continue;
                    };
                    let mut ctl = controller.borrow_mut();
                    if ctl.crosses_start(entry.bounding_client_rect().top(), height)
                        && ctl.section_visible(index)
                    {
                        observer.unobserve(&section);
                    }
                }
            }) as Box<dyn FnMut(Array, IntersectionObserver)>)
        };

        // Only the top `section_start` of the viewport counts as visible.
        let init = IntersectionObserverInit::new();
        let cutoff = ((1.0 - config.section_start) * 100.0).round();
        init.set_root_margin(&format!("0px 0px -{cutoff}% 0px"));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        for section in &targets.sections {
            observer.observe(section);
        }

        // A jump can carry a section past the viewport without it ever
        // intersecting, so scrolling re-checks the unfired ones too.
        let on_scroll = {
            let controller = controller.clone();
            let targets = targets.clone();
            let w = window.clone();
            Listener::new(&window, "scroll", move |_| targets.sweep(&controller, &w))?
        };
        (Some(observer), Some(callback), Some(on_scroll))
    };

    let frames = {
        let controller = controller.clone();
        let targets = targets.clone();
        let mut clock = FrameClock::default();
        let mut settled = false;
        FrameLoop::start(move |timestamp| {
            let dt = clock.delta(timestamp);
            let mut ctl = controller.borrow_mut();
            if ctl.is_reverted() {
                return false;
            }
            ctl.advance(dt);
            let animating = ctl.is_animating();
            // One last write after motion stops lands the resting values.
            if animating || !settled {
                targets.sync(&ctl);
            }
            settled = !animating;
            true
        })?
    };

    log::info!(
        "entrance mounted: {} hero lines, {} sections",
        targets.hero.len(),
        targets.sections.len()
    );

    Ok(EntranceLayer {
        controller,
        saved,
        observer,
        _on_intersect: on_intersect,
        _on_scroll: on_scroll,
        frames: Some(frames),
    })
}

impl Drop for EntranceLayer {
    fn drop(&mut self) {
        self.controller.borrow_mut().revert();
        self.frames.take();
        self._on_scroll.take();
        if let Some(observer) = self.observer.take() {
            observer.disconnect();
        }
        for style in &self.saved {
            style.restore();
        }
    }
}
