pub mod api;
pub mod app;
pub mod chart;
pub mod components;
pub mod hover;
pub mod model;
pub mod theme;

#[cfg(feature = "ssr")]
pub mod aggregate;

#[cfg(feature = "ssr")]
pub mod client;

#[cfg(feature = "ssr")]
pub mod config;

#[cfg(feature = "ssr")]
pub mod error;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
