//! Motion layer of the portfolio site: the blurred blob background, the
//! pointer-following reveal mask, entrance animations, and the showcase
//! page's render demo.
//!
//! Everything outside `wasm` is host-agnostic and runs under plain
//! `cargo test`.

pub mod carousel;
pub mod config;
pub mod content;
pub mod easing;
pub mod entrance;
pub mod generation;
pub mod particle;
pub mod point;
pub mod random;
pub mod reveal;
pub mod simulator;
pub mod surface;
pub mod timeline;

// Only compile wasm-specific code when targeting wasm32.

#[cfg(target_arch = "wasm32")]
pub mod wasm {
    use wasm_bindgen::prelude::*;

    mod canvas;
    mod carousel;
    mod dom;
    mod entrance;
    mod frame;
    mod generation;
    mod hover;
    mod page;
    mod render;
    mod reveal;

    pub use page::Portfolio;

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();
        log::info!("portfolio motion loaded");
        Ok(())
    }
}
