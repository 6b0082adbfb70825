//! Page Boot
//!
//! Attaches every page region once the document is ready. Regions are
//! independent: a failure in one is logged and the rest still wire up.

use crate::config::UiConfig;
use crate::error::UiResult;
use crate::fragments::ChildrenFragments;
use crate::messages::Messages;
use crate::{barcode, children, dom, feedback, pwa, validation};

/// Run `boot` when the DOM is ready
pub fn start() -> UiResult<()> {
    let doc = dom::document()?;
    if doc.ready_state() == "loading" {
        dom::listen_once(doc.as_ref(), "DOMContentLoaded", boot)?;
    } else {
        boot();
    }
    Ok(())
}

fn boot() {
    let config = UiConfig::from_document();
    log::set_max_level(config.log_level().to_level_filter());
    log::debug!("booting with {:?}", config);

    let messages = Messages::new(&config);
    let swept = messages.sweep_existing();
    log::debug!(
        "{} server message(s) dismissed within {}ms",
        swept,
        messages.lifetime_ms()
    );

    let fragments = ChildrenFragments::new(&config, messages);
    report("children", children::bind(fragments));

    barcode::render_page_barcode();

    report("barcode card", feedback::bind_barcode_card(config.press_reset_ms));
    report("nav", feedback::bind_nav_items());
    report("forms", validation::bind_forms(messages, config.texts.required_fields.clone()));
    report("buttons", feedback::bind_buttons());
    report("service worker", pwa::register_on_load(config.service_worker_path.clone()));
}

fn report<T: std::fmt::Debug>(region: &str, result: UiResult<T>) {
    match result {
        Ok(wired) => log::debug!("{} wired: {:?}", region, wired),
        Err(e) => log::error!("{} not wired: {}", region, e),
    }
}
