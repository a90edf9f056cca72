//! Harbor marketing site front end.
//!
//! This crate provides the Leptos application: the route table mounted as
//! `<Routes>`, the page layout wrapper that hands each page its navigation
//! callbacks, the page components, and the axum server that renders every
//! route on first load.

#![allow(non_snake_case)]

pub mod app;
pub mod browser;
pub mod components;
#[cfg(feature = "ssr")]
pub mod config;
#[cfg(feature = "ssr")]
pub mod error;
pub mod layout;
pub mod pages;
pub mod telemetry;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;
    console_error_panic_hook::set_once();
    telemetry::init_browser();
    leptos::mount::hydrate_body(App);
}
