//! Barcode Stripes Component
//!
//! Stripe row plus the human-readable code underneath.

use leptos::prelude::*;

use crate::barcode::{stripe_color, BarcodePattern};

#[component]
pub fn BarcodeStripes(pattern: BarcodePattern, #[prop(into)] code: String) -> impl IntoView {
    let stripes = pattern
        .widths()
        .iter()
        .enumerate()
        .map(|(index, width)| {
            let style = format!("width: {}px; background-color: {};", width, stripe_color(index));
            view! { <div class="barcode-line" style=style></div> }
        })
        .collect_view();

    view! {
        <div class="barcode-stripes">{stripes}</div>
        <div class="barcode-code">{code}</div>
    }
}
