use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, Window};

use crate::timeline::Property;

/// An event listener that detaches itself when dropped.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn new<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<Self, JsValue>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let callback = self.callback.as_ref().unchecked_ref();
        if let Err(err) = self
            .target
            .remove_event_listener_with_callback(self.event, callback)
        {
            log::warn!("detaching {} listener failed: {err:?}", self.event);
        }
    }
}

pub fn viewport(window: &Window) -> Result<(f64, f64), JsValue> {
    let width = window
        .inner_width()?
        .as_f64()
        .ok_or("innerWidth is not a number")?;
    let height = window
        .inner_height()?
        .as_f64()
        .ok_or("innerHeight is not a number")?;
    Ok((width, height))
}

pub fn query_all(document: &Document, selector: &str) -> Result<Vec<HtmlElement>, JsValue> {
    let list = document.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect())
}

pub fn query_in(root: &Element, selector: &str) -> Option<HtmlElement> {
    root.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

fn css_name(property: Property) -> &'static str {
    match property {
        Property::Opacity => "opacity",
        Property::TranslateY => "transform",
        Property::Height => "height",
    }
}

pub fn apply(element: &HtmlElement, property: Property, value: f64) -> Result<(), JsValue> {
    let css = match property {
        Property::Opacity => value.to_string(),
        Property::TranslateY => format!("translateY({value}px)"),
        Property::Height => format!("{value}%"),
    };
    element.style().set_property(css_name(property), &css)
}

/// Inline style of the channels we animate, captured so it can be put back.
pub struct SavedStyle {
    element: HtmlElement,
    values: Vec<(&'static str, String)>,
}

impl SavedStyle {
    pub fn capture(element: &HtmlElement, properties: &[Property]) -> Self {
        let style = element.style();
        let values = properties
            .iter()
            .map(|&p| {
                let name = css_name(p);
                (name, style.get_property_value(name).unwrap_or_default())
            })
            .collect();
        Self {
            element: element.clone(),
            values,
        }
    }

    pub fn restore(&self) {
        let style = self.element.style();
        for (name, value) in &self.values {
            let restored = if value.is_empty() {
                style.remove_property(name).map(|_| ())
            } else {
                style.set_property(name, value)
            };
            if let Err(err) = restored {
                log::warn!("restoring {name} failed: {err:?}");
            }
        }
    }
}
