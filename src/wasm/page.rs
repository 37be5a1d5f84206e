use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use super::dom::{query_all, Listener};
use super::{carousel, entrance, generation, hover, render, reveal};

/// Everything mounted on the current page. Fields drop in declaration order.
struct Mounted {
    background: Option<render::BackgroundLayer>,
    reveal: Option<reveal::PointerReveal>,
    entrance: Option<entrance::EntranceLayer>,
    generation: Option<generation::GenerationPanel>,
    carousel: Option<carousel::CarouselPanel>,
    _hover: Vec<Listener>,
}

/// Handle JavaScript holds for the lifetime of a page view.
#[wasm_bindgen]
pub struct Portfolio {
    mounted: Option<Mounted>,
}

#[wasm_bindgen]
impl Portfolio {
    /// Mount every animated component whose anchor exists in the document.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<Portfolio, JsValue> {
        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let background = match document.get_element_by_id("background") {
            Some(el) => match el.dyn_into::<HtmlCanvasElement>() {
                Ok(canvas) => render::start(canvas)?,
                Err(_) => {
                    log::warn!("#background is not a canvas");
                    None
                }
            },
            None => None,
        };

        let reveal = match document.get_element_by_id("reveal-layer") {
            Some(el) => Some(reveal::mount(el.dyn_into()?)?),
            None => None,
        };

        let hero = query_all(&document, ".hero-line")?;
        let sections = query_all(&document, "section.container")?;
        let entrance = if hero.is_empty() && sections.is_empty() {
            None
        } else {
            Some(entrance::mount(hero, sections)?)
        };

        let generation = match document.get_element_by_id("generation-demo") {
            Some(root) => generation::mount(&root)?,
            None => None,
        };

        let carousel = match document.query_selector("[data-carousel]")? {
            Some(root) => carousel::mount(&document, &root)?,
            None => None,
        };

        let hover = hover::mount(query_all(&document, ".work-item[data-project]")?)?;

        Ok(Portfolio {
            mounted: Some(Mounted {
                background,
                reveal,
                entrance,
                generation,
                carousel,
                _hover: hover,
            }),
        })
    }

    /// Detach every listener and stop every frame loop. Idempotent.
    pub fn unmount(&mut self) {
        if self.mounted.take().is_some() {
            log::info!("portfolio unmounted");
        }
    }

    #[wasm_bindgen(getter)]
    pub fn mounted(&self) -> bool {
        self.mounted.is_some()
    }

    #[wasm_bindgen(getter, js_name = backgroundRunning)]
    pub fn background_running(&self) -> bool {
        self.part(|m| m.background.as_ref().map(|b| b.is_running()))
    }

    #[wasm_bindgen(getter, js_name = particleCount)]
    pub fn particle_count(&self) -> usize {
        self.mounted
            .as_ref()
            .and_then(|m| m.background.as_ref())
            .map_or(0, |b| b.particle_count())
    }

    #[wasm_bindgen(js_name = sectionRevealed)]
    pub fn section_revealed(&self, index: usize) -> bool {
        self.part(|m| m.entrance.as_ref().map(|e| e.section_fired(index)))
    }

    #[wasm_bindgen(getter, js_name = generationDone)]
    pub fn generation_done(&self) -> bool {
        self.part(|m| {
            m.generation
                .as_ref()
                .map(|g| g.state() == crate::generation::GenerationState::Done)
        })
    }

    #[wasm_bindgen(getter, js_name = carouselIndex)]
    pub fn carousel_index(&self) -> usize {
        self.mounted
            .as_ref()
            .and_then(|m| m.carousel.as_ref())
            .map_or(0, |c| c.index())
    }

    #[wasm_bindgen(getter, js_name = pointerX)]
    pub fn pointer_x(&self) -> f64 {
        self.mounted
            .as_ref()
            .and_then(|m| m.reveal.as_ref())
            .map_or(0.0, |r| r.pointer().position().x)
    }
}

impl Portfolio {
    fn part(&self, f: impl FnOnce(&Mounted) -> Option<bool>) -> bool {
        self.mounted.as_ref().and_then(f).unwrap_or(false)
    }
}
