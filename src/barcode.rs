//! Pseudo-Barcode
//!
//! Decorative stripe pattern derived from a code string. Not a real
//! symbology: the same string always yields the same stripes, nothing more.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::components::BarcodeStripes;
use crate::dom;

pub const BAR_COUNT: usize = 40;

/// Ordered bar widths, each in 1..=4
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarcodePattern {
    widths: Vec<u8>,
}

impl BarcodePattern {
    pub fn from_value(value: &str) -> Self {
        let seed = seed(value);
        let widths = (0..BAR_COUNT as u32)
            .map(|i| (seed.wrapping_add(i) % 4) as u8 + 1)
            .collect();
        Self { widths }
    }

    pub fn widths(&self) -> &[u8] {
        &self.widths
    }
}

/// Sum of the UTF-16 code units of `value`
fn seed(value: &str) -> u32 {
    value
        .encode_utf16()
        .fold(0u32, |acc, unit| acc.wrapping_add(u32::from(unit)))
}

/// Even stripes are ink, odd stripes are gaps
pub fn stripe_color(index: usize) -> &'static str {
    if index % 2 == 0 {
        "#000"
    } else {
        "transparent"
    }
}

/// Replace `container`'s content with the stripes and label for `value`.
/// Does nothing when either is missing.
pub fn generate_barcode(value: Option<&str>, container: Option<HtmlElement>) {
    let (Some(value), Some(container)) = (value.filter(|v| !v.is_empty()), container) else {
        return;
    };
    let pattern = BarcodePattern::from_value(value);
    let code = value.to_string();
    container.set_inner_html("");
    leptos::mount::mount_to(container, move || view! { <BarcodeStripes pattern=pattern code=code /> }).forget();
}

/// Render the page's barcode card from its `data-barcode-code` attribute
pub fn render_page_barcode() -> bool {
    let container = dom::query(".barcode-display").and_then(|el| el.dyn_into::<HtmlElement>().ok());
    let code = dom::query("[data-barcode-code]").and_then(|el| el.get_attribute("data-barcode-code"));
    if container.is_none() || code.is_none() {
        return false;
    }
    log::debug!("rendering barcode");
    generate_barcode(code.as_deref(), container);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forty_bars_in_range() {
        let pattern = BarcodePattern::from_value("ABC");
        assert_eq!(pattern.widths().len(), BAR_COUNT);
        assert!(pattern.widths().iter().all(|w| (1..=4).contains(w)));
    }

    #[test]
    fn test_abc_sequence() {
        // 'A' + 'B' + 'C' = 198, 198 % 4 = 2
        let pattern = BarcodePattern::from_value("ABC");
        assert_eq!(&pattern.widths()[..5], &[3, 4, 1, 2, 3]);
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(
            BarcodePattern::from_value("KMP-2024-0001"),
            BarcodePattern::from_value("KMP-2024-0001")
        );
    }

    #[test]
    fn test_seed_uses_utf16_units() {
        // 'ç' is U+00E7, '𝄞' is a surrogate pair D834 DD1E
        assert_eq!(seed("ç"), 0xE7);
        assert_eq!(seed("𝄞"), 0xD834 + 0xDD1E);
    }

    #[test]
    fn test_stripe_colors_alternate() {
        assert_eq!(stripe_color(0), "#000");
        assert_eq!(stripe_color(1), "transparent");
        assert_eq!(stripe_color(38), "#000");
    }
}
