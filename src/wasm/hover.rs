use wasm_bindgen::JsValue;
use web_sys::HtmlElement;

use super::dom::Listener;
use crate::content::{hover_color, DEFAULT_HOVER_COLOR};

fn paint(row: &HtmlElement, color: &str) {
    if let Err(err) = row.style().set_property("background-color", color) {
        log::warn!("work row paint failed: {err:?}");
    }
}

/// Tint each work-list row with its project color while hovered.
pub fn mount(rows: Vec<HtmlElement>) -> Result<Vec<Listener>, JsValue> {
    let mut listeners = Vec::with_capacity(rows.len() * 2);
    for row in rows {
        let name = row.get_attribute("data-project").unwrap_or_default();
        let color = hover_color(&name);
        paint(&row, DEFAULT_HOVER_COLOR);

        let enter = row.clone();
        listeners.push(Listener::new(&row, "mouseenter", move |_| paint(&enter, color))?);
        let leave = row.clone();
        listeners.push(Listener::new(&row, "mouseleave", move |_| {
            paint(&leave, DEFAULT_HOVER_COLOR)
        })?);
    }
    Ok(listeners)
}
