//! KoLab waitlist
//!
//! Single-page waitlist site with an animated hero and an email signup form,
//! built with Leptos and WebAssembly.

#![recursion_limit = "4096"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    use crate::core::config::ClientConfig;
    use leptos::prelude::*;

    console_error_panic_hook::set_once();

    let client = ClientConfig::from_document();
    leptos::logging::log!("Hydrating in {} mode", client.mode);

    leptos::mount::hydrate_body(move || {
        provide_context(client);
        view! { <App/> }
    });
}
