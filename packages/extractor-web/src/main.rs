//! PDF Extractor - Dioxus Web Application
//!
//! Browser shell for the extraction workflow: pick or drop a PDF, send it to
//! the matching extraction endpoint and browse the extracted fields.
//!
//! ## Running
//!
//! Development (with hot reload):
//! ```bash
//! EXTRACTOR_API_URL=http://localhost:5000 dx serve --features web
//! ```
//!
//! Production build:
//! ```bash
//! dx build --release --features web
//! ```

#![allow(non_snake_case)]

mod app;
mod components;
mod config;
mod pages;
mod state;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    config::init_api_base(&config::resolve_api_base());

    // Launch the Dioxus app
    dioxus::launch(app::App);
}
