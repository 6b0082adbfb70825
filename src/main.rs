//! Campaign Web UI Entry Point
//!
//! Behavior for the server-rendered mobile pages.

mod app;
mod barcode;
mod children;
mod components;
mod config;
mod cookies;
mod dom;
mod error;
mod feedback;
mod fragments;
mod messages;
mod pwa;
mod validation;

fn main() {
    console_error_panic_hook::set_once();
    // Debug level is decided once the body's attributes are readable
    _ = console_log::init_with_level(log::Level::Info);
    if let Err(e) = app::start() {
        log::error!("page behavior not started: {}", e);
    }
}
