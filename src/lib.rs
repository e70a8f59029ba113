//! # monitor-client
//!
//! Browser-side helpers for the monitoring dashboard's Leptos frontend:
//! timezone pickers, page locale attributes, API base URL resolution,
//! host input validation and the tag color palette.
//!
//! Everything that touches `window` sits behind the `hydrate` feature and
//! falls back to a no-op (or `None`) in SSR and native test builds.

pub mod config;
pub mod state;
pub mod util;

/// WASM entry point: installs console logging and applies the page locale.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    util::locale::set_page_locale();
}
