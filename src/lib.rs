//! Hanzi widgets core crate.
//!
//! Two small browser widgets compiled to WASM: a markdown credits roll and a
//! Zhuyin typing-practice keyboard. All rules (phonetic composition, markdown
//! subset, scroll timing, input validation) live in host-testable modules;
//! the `view` modules only bind them to the DOM.

use wasm_bindgen::prelude::*;

pub mod credits;
pub mod error;
pub mod zhuyin;

mod dom;
mod frame;
mod notify;

pub use error::WidgetError;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    // Already installed when the module is re-initialised.
    let _ = tracing_wasm::try_set_as_global_default();
}

// -----------------------------------------------------------------------------
// Entrypoints
// -----------------------------------------------------------------------------

/// Mounts the credits roll. `config_json` may be empty or a partial
/// `CreditsSettings` object, e.g. `{"speed": 1.5, "font_size_px": 20}`.
#[wasm_bindgen]
pub fn start_credits(config_json: &str) -> Result<(), JsValue> {
    credits::view::start(config_json).map_err(Into::into)
}

#[wasm_bindgen]
pub fn stop_credits() {
    credits::view::stop();
}

#[wasm_bindgen]
pub fn start_zhuyin() -> Result<(), JsValue> {
    zhuyin::view::start().map_err(Into::into)
}

#[wasm_bindgen]
pub fn stop_zhuyin() {
    zhuyin::view::stop();
}

/// Composes `current` with one more symbol and returns the display string.
/// Pure helper for hosts that keep their own state.
#[wasm_bindgen]
pub fn compose_zhuyin(current: &str, symbol: &str) -> String {
    let mut c = zhuyin::Composition::from_display(current);
    for glyph in symbol.chars() {
        c.push(glyph);
    }
    c.to_string()
}

/// Renders the credits markdown subset to escaped HTML.
#[wasm_bindgen]
pub fn render_credits_markdown(text: &str, font_size_px: f64) -> String {
    credits::markdown::render(text, font_size_px)
}
