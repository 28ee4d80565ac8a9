//! Activity Roster
//!
//! Browser front end for the activity sign-up service, built with Leptos
//! (WASM).
//!
//! # Features
//!
//! - Activity list with schedule, availability and participants
//! - Sign-up form backed by `POST /activities/{name}/signup`
//! - Participant removal backed by `DELETE /activities/{name}/unregister`
//! - Transient success/error status messages
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It talks to the activities API over HTTP and re-fetches the
//! whole catalog after every successful change.

use leptos::*;

mod actions;
mod api;
mod app;
mod components;
mod config;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    let config = config::ClientConfig::load();

    if let Err(e) = console_log::init_with_level(config.log_level) {
        web_sys::console::error_1(&format!("Logger init failed: {}", e).into());
    }

    log::info!(
        "Starting activity roster v{} (api base: {:?})",
        env!("CARGO_PKG_VERSION"),
        config.api_base
    );

    // Mount the app to the document body
    mount_to_body(move || view! { <app::App config=config.clone() /> });
}
