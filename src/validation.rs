//! Form Guard
//!
//! Blocks submission of forms with blank `[required]` fields.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlElement};

use crate::dom;
use crate::error::UiResult;
use crate::messages::{MessageKind, Messages};

const INVALID_BORDER: &str = "var(--error)";
const VALID_BORDER: &str = "var(--gray-300)";

/// Empty after trimming whitespace
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// `value` of any form control (input, select, textarea)
fn control_value(el: &Element) -> String {
    js_sys::Reflect::get(el, &JsValue::from_str("value"))
        .ok()
        .and_then(|v| v.as_string())
        .unwrap_or_default()
}

fn mark_invalid(field: &Element) {
    dom::set_style(field, "border-color", INVALID_BORDER);
    let restored = field.clone();
    let _ = dom::listen_once(field.as_ref(), "input", move || {
        dom::set_style(&restored, "border-color", VALID_BORDER);
    });
}

/// Outcome of checking a form's required values
#[derive(Debug, PartialEq, Eq)]
pub enum SubmitVerdict {
    Proceed,
    /// Indices of the blank values, in document order; one toast is shown
    Block(Vec<usize>),
}

pub fn check_required(values: &[String]) -> SubmitVerdict {
    let blank: Vec<usize> = values
        .iter()
        .enumerate()
        .filter(|(_, value)| is_blank(value))
        .map(|(index, _)| index)
        .collect();
    if blank.is_empty() {
        SubmitVerdict::Proceed
    } else {
        SubmitVerdict::Block(blank)
    }
}

/// Guard every form on the page; returns how many were wired
pub fn bind_forms(messages: Messages, required_text: String) -> UiResult<usize> {
    let forms = dom::query_all("form");
    for form in &forms {
        let scope = form.clone();
        let text = required_text.clone();
        dom::listen(form.as_ref(), "submit", move |ev| {
            let fields = dom::query_all_in(&scope, "[required]");
            let values: Vec<String> = fields.iter().map(control_value).collect();
            let SubmitVerdict::Block(blank) = check_required(&values) else {
                return;
            };
            ev.prevent_default();
            for field in blank.iter().filter_map(|&i| fields.get(i)) {
                mark_invalid(field);
            }
            if let Some(first) = blank
                .first()
                .and_then(|&i| fields.get(i))
                .and_then(|f| f.dyn_ref::<HtmlElement>())
            {
                let _ = first.focus();
            }
            log::debug!("submit blocked, {} required field(s) blank", blank.len());
            messages.notify(&text, MessageKind::Error);
        })?;
    }
    Ok(forms.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_values() {
        assert!(is_blank(""));
        assert!(is_blank("   "));
        assert!(is_blank("\t\n"));
    }

    #[test]
    fn test_filled_values() {
        assert!(!is_blank("a"));
        assert!(!is_blank("  0  "));
        assert!(!is_blank("3_yas"));
    }

    fn values(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_blank_and_whitespace_block_submit() {
        let verdict = check_required(&values(&["Ayşe", "", "   ", "3_yas"]));
        assert_eq!(verdict, SubmitVerdict::Block(vec![1, 2]));
    }

    #[test]
    fn test_all_filled_proceeds() {
        assert_eq!(check_required(&values(&["a", "0", " b "])), SubmitVerdict::Proceed);
    }

    #[test]
    fn test_no_required_fields_proceeds() {
        assert_eq!(check_required(&[]), SubmitVerdict::Proceed);
    }
}
