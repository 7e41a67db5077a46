//! DealPulse storefront.
//!
//! Leptos front-end over the `deal-core` and `deal-commerce` crates:
//! - Countdown banner ticking once per second in the browser
//! - Deal grids and carousels built from listing partitions
//! - Modals opened by their own button, a page signal or the URL fragment
//! - Seller directory, category pages, FAQ and partner application form
//!
//! The `ssr` feature builds the Spin/WASI handler; `hydrate` builds the
//! browser bundle.

pub mod app;
pub mod components;
pub mod config;
pub mod context;
pub mod error;
pub mod format;
pub mod hooks;
pub mod pages;

#[cfg(feature = "ssr")]
mod server;

pub use error::WebError;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use app::App;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
