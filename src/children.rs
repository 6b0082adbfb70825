//! Children Section
//!
//! `#has_children` checkbox toggling the `#children_count` selector, whose
//! changes pull fresh sub-form markup from the server.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlInputElement, HtmlSelectElement};

use crate::dom;
use crate::error::UiResult;
use crate::fragments::{ChildrenFragments, CONTAINER_ID};

const CHECKBOX_ID: &str = "has_children";
const SELECT_ID: &str = "children_count";

/// Visible state of the section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionState {
    /// Checkbox unchecked: selector hidden, sub-form empty, count "0"
    Collapsed,
    /// Checkbox checked: selector shown, sub-form left as the server rendered it
    Expanded,
}

impl SectionState {
    pub fn from_checked(checked: bool) -> Self {
        if checked {
            SectionState::Expanded
        } else {
            SectionState::Collapsed
        }
    }

    pub fn wrapper_display(self) -> &'static str {
        match self {
            SectionState::Collapsed => "none",
            SectionState::Expanded => "block",
        }
    }

    /// Whether entering this state discards the sub-form and resets the count
    pub fn resets_fields(self) -> bool {
        self == SectionState::Collapsed
    }
}

/// Parse a selector value into a children count
pub fn parse_count(value: &str) -> Option<u32> {
    value.trim().parse().ok()
}

/// The three elements making up the section
struct ChildrenSection {
    checkbox: HtmlInputElement,
    select: HtmlSelectElement,
    container: HtmlElement,
}

impl ChildrenSection {
    fn find() -> Option<Self> {
        Some(Self {
            checkbox: dom::by_id(CHECKBOX_ID)?,
            select: dom::by_id(SELECT_ID)?,
            container: dom::by_id(CONTAINER_ID)?,
        })
    }

    fn render(&self, state: SectionState) {
        if let Some(wrapper) = self.select.parent_element() {
            dom::set_style(&wrapper, "display", state.wrapper_display());
        }
        if state.resets_fields() {
            self.container.set_inner_html("");
            self.select.set_value("0");
        }
    }
}

/// Wire the checkbox and selector. Returns `Ok(false)` when the page has no
/// children section.
pub fn bind(fragments: ChildrenFragments) -> UiResult<bool> {
    let Some(section) = ChildrenSection::find() else {
        log::debug!("no children section on this page");
        return Ok(false);
    };
    let section = Rc::new(section);

    section.render(SectionState::from_checked(section.checkbox.checked()));

    let on_toggle = section.clone();
    let pending = fragments.clone();
    dom::listen(section.checkbox.as_ref(), "change", move |_| {
        let state = SectionState::from_checked(on_toggle.checkbox.checked());
        log::debug!("children section -> {:?}", state);
        // A late response must not refill the emptied container
        if state.resets_fields() {
            pending.cancel_pending();
        }
        on_toggle.render(state);
    })?;

    let on_count = section.clone();
    dom::listen(section.select.as_ref(), "change", move |ev| {
        if !on_count.checkbox.checked() {
            return;
        }
        let value = ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlSelectElement>().ok())
            .map(|select| select.value())
            .unwrap_or_else(|| on_count.select.value());
        match parse_count(&value) {
            Some(count) => fragments.update_children_fields(count),
            None => log::warn!("ignoring unparsable children count '{}'", value),
        }
    })?;

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unchecked_collapses_and_resets() {
        let state = SectionState::from_checked(false);
        assert_eq!(state, SectionState::Collapsed);
        assert_eq!(state.wrapper_display(), "none");
        assert!(state.resets_fields());
    }

    #[test]
    fn test_checked_expands_without_reset() {
        let state = SectionState::from_checked(true);
        assert_eq!(state, SectionState::Expanded);
        assert_eq!(state.wrapper_display(), "block");
        assert!(!state.resets_fields());
    }

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("3"), Some(3));
        assert_eq!(parse_count(" 0 "), Some(0));
        assert_eq!(parse_count(""), None);
        assert_eq!(parse_count("-1"), None);
        assert_eq!(parse_count("two"), None);
    }
}
