//! Touch Feedback
//!
//! Press effects on buttons and the barcode card, and the active nav item.

use crate::dom;
use crate::error::UiResult;

const PRESSED: &str = "scale(0.98)";
const RELEASED: &str = "scale(1)";
const ACTIVE_CLASS: &str = "active";

/// Shrink `.btn` elements while touched
pub fn bind_buttons() -> UiResult<usize> {
    let buttons = dom::query_all(".btn");
    for button in &buttons {
        for (event, transform) in [
            ("touchstart", PRESSED),
            ("touchend", RELEASED),
            ("touchcancel", RELEASED),
        ] {
            let target = button.clone();
            dom::listen(button.as_ref(), event, move |_| {
                dom::set_style(&target, "transform", transform);
            })?;
        }
    }
    Ok(buttons.len())
}

/// Brief press effect when the barcode card is tapped
pub fn bind_barcode_card(reset_ms: u32) -> UiResult<bool> {
    let Some(card) = dom::query(".barcode-card") else {
        return Ok(false);
    };
    let target = card.clone();
    dom::listen(card.as_ref(), "click", move |_| {
        dom::set_style(&target, "transform", PRESSED);
        let pressed = target.clone();
        dom::after(reset_ms, move || dom::set_style(&pressed, "transform", RELEASED));
    })?;
    Ok(true)
}

/// Keep `active` on the last clicked `.nav-item` only
pub fn bind_nav_items() -> UiResult<usize> {
    let items = dom::query_all(".nav-item");
    for item in &items {
        let clicked = item.clone();
        let siblings = items.clone();
        dom::listen(item.as_ref(), "click", move |_| {
            for nav in &siblings {
                let _ = nav.class_list().remove_1(ACTIVE_CLASS);
            }
            let _ = clicked.class_list().add_1(ACTIVE_CLASS);
        })?;
    }
    Ok(items.len())
}
