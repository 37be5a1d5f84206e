#![cfg(target_arch = "wasm32")]

use portfolio_motion::wasm::Portfolio;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Event, HtmlButtonElement, HtmlElement, MouseEvent, MouseEventInit};

wasm_bindgen_test_configure!(run_in_browser);

/// Appends `html` to the body inside a fresh wrapper.
fn fixture(html: &str) -> HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let root = document
        .create_element("div")
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap();
    root.set_inner_html(html);
    document.body().unwrap().append_child(&root).unwrap();
    root
}

fn find<T: JsCast>(root: &HtmlElement, selector: &str) -> T {
    root.query_selector(selector)
        .unwrap()
        .expect("fixture element")
        .dyn_into::<T>()
        .unwrap()
}

fn mask_of(el: &HtmlElement) -> String {
    let style = el.style();
    let plain = style.get_property_value("mask-image").unwrap();
    if plain.is_empty() {
        style.get_property_value("-webkit-mask-image").unwrap()
    } else {
        plain
    }
}

fn move_pointer(x: i32, y: i32) {
    let init = MouseEventInit::new();
    init.set_client_x(x);
    init.set_client_y(y);
    let event = MouseEvent::new_with_mouse_event_init_dict("mousemove", &init).unwrap();
    web_sys::window().unwrap().dispatch_event(&event).unwrap();
}

#[wasm_bindgen_test]
fn empty_page_mounts_nothing() {
    let mut page = Portfolio::new().unwrap();
    assert!(page.mounted());
    assert_eq!(page.particle_count(), 0);
    assert!(!page.background_running());
    page.unmount();
    page.unmount();
    assert!(!page.mounted());
}

#[wasm_bindgen_test]
fn background_seeds_one_blob_per_color() {
    let root = fixture(r#"<canvas id="background"></canvas>"#);
    let mut page = Portfolio::new().unwrap();
    assert_eq!(page.particle_count(), 4);
    assert!(page.background_running());

    page.unmount();
    assert_eq!(page.particle_count(), 0);
    root.remove();
}

#[wasm_bindgen_test]
fn mask_snaps_to_the_pointer_until_unmount() {
    let root = fixture(r#"<div id="reveal-layer"></div>"#);
    let layer: HtmlElement = find(&root, "#reveal-layer");
    let mut page = Portfolio::new().unwrap();
    assert!(!mask_of(&layer).is_empty());

    move_pointer(120, 80);
    assert_eq!(page.pointer_x(), 120.0);
    assert!(mask_of(&layer).contains("120px"));

    page.unmount();
    move_pointer(10, 10);
    assert!(mask_of(&layer).contains("120px"));
    root.remove();
}

fn scroll_to(y: f64) {
    web_sys::window().unwrap().scroll_to_with_x_and_y(0.0, y);
}

fn opacity_of(el: &HtmlElement) -> String {
    el.style().get_property_value("opacity").unwrap()
}

#[wasm_bindgen_test]
fn sections_start_hidden_and_are_restored() {
    scroll_to(0.0);
    let root = fixture(
        r#"<div style="height: 300vh"></div>
           <section class="container">works</section>"#,
    );
    let section: HtmlElement = find(&root, "section.container");
    let mut page = Portfolio::new().unwrap();
    assert_eq!(opacity_of(&section), "0");
    assert!(!page.section_revealed(0));

    page.unmount();
    assert_eq!(opacity_of(&section), "");
    assert_eq!(section.style().get_property_value("transform").unwrap(), "");
    root.remove();
}

#[wasm_bindgen_test]
fn section_scrolled_past_before_mount_reveals() {
    let root = fixture(
        r#"<section class="container" style="height: 500px">works</section>
           <div style="height: 400vh"></div>"#,
    );
    scroll_to(100_000.0);
    let section: HtmlElement = find(&root, "section.container");
    assert!(section.get_bounding_client_rect().bottom() < 0.0);

    let mut page = Portfolio::new().unwrap();
    assert!(page.section_revealed(0));

    page.unmount();
    root.remove();
    scroll_to(0.0);
}

#[wasm_bindgen_test]
fn jump_past_a_section_still_reveals_it() {
    scroll_to(0.0);
    let root = fixture(
        r#"<div style="height: 400vh"></div>
           <section class="container" style="height: 500px">works</section>
           <div style="height: 400vh"></div>"#,
    );
    let mut page = Portfolio::new().unwrap();
    assert!(!page.section_revealed(0));

    // Straight to the bottom: the section never intersects on the way.
    scroll_to(100_000.0);
    let window = web_sys::window().unwrap();
    window.dispatch_event(&Event::new("scroll").unwrap()).unwrap();
    assert!(page.section_revealed(0));

    page.unmount();
    root.remove();
    scroll_to(0.0);
}

#[wasm_bindgen_test]
fn generate_button_guards_reentry() {
    let root = fixture(
        r#"<div id="generation-demo">
             <div data-layer="raw"></div>
             <div data-layer="generated"></div>
             <div data-layer="scanline"></div>
             <button data-generate></button>
             <span data-render-time></span>
           </div>"#,
    );
    let button: HtmlButtonElement = find(&root, "[data-generate]");
    let readout: HtmlElement = find(&root, "[data-render-time]");
    let mut page = Portfolio::new().unwrap();
    assert_eq!(button.text_content().as_deref(), Some("GENERATE"));
    assert!(!button.disabled());
    assert!(readout.hidden());

    button.click();
    assert_eq!(button.text_content().as_deref(), Some("PROCESSING..."));
    assert!(button.disabled());
    assert!(!page.generation_done());

    button.click();
    assert_eq!(button.text_content().as_deref(), Some("PROCESSING..."));

    page.unmount();
    root.remove();
}

#[wasm_bindgen_test]
fn carousel_fills_and_loops() {
    let root = fixture(
        r#"<div data-carousel>
             <div data-carousel-track></div>
             <button data-carousel-prev></button>
             <button data-carousel-next></button>
           </div>"#,
    );
    let track: HtmlElement = find(&root, "[data-carousel-track]");
    let mut page = Portfolio::new().unwrap();
    assert_eq!(track.child_element_count(), 6);

    find::<HtmlElement>(&root, "[data-carousel-prev]").click();
    assert_eq!(page.carousel_index(), 5);
    find::<HtmlElement>(&root, "[data-carousel-next]").click();
    assert_eq!(page.carousel_index(), 0);

    page.unmount();
    root.remove();
}

#[wasm_bindgen_test]
fn work_rows_tint_on_hover() {
    let root = fixture(r#"<div class="work-item" data-project="Procida">Procida</div>"#);
    let row: HtmlElement = find(&root, ".work-item");
    let mut page = Portfolio::new().unwrap();
    let resting = row.style().get_property_value("background-color").unwrap();

    row.dispatch_event(&Event::new("mouseenter").unwrap()).unwrap();
    let hovered = row.style().get_property_value("background-color").unwrap();
    assert_ne!(hovered, resting);

    row.dispatch_event(&Event::new("mouseleave").unwrap()).unwrap();
    assert_eq!(row.style().get_property_value("background-color").unwrap(), resting);

    page.unmount();
    root.remove();
}
