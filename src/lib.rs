//! Zen Landing - interactivity for the Zen Dev Studio "coming soon" page
//!
//! Newsletter signup with validation and simulated confirmation, smooth scrolling for in-page
//! links, a scroll-aware navbar and fade-in sections, compiled to WebAssembly and attached to
//! the static page markup.
//!
//! The behavior lives in [`core`] and is host-independent. With the `hydrate` feature the
//! [`ui`] module binds it to the browser document; the page calls the exported `hydrate()`
//! after initializing the wasm module.

pub mod core;
#[cfg(feature = "hydrate")]
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    ui::start();
}

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn teardown() {
    ui::teardown();
}
