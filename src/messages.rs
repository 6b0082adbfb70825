//! Messages
//!
//! Transient notifications: server-rendered `.message` elements and toasts
//! raised from code. Both fade out after a fixed delay and are detached.

use web_sys::Element;

use crate::config::UiConfig;
use crate::dom;
use crate::error::{UiError, UiResult};

/// Notification severity, rendered as a CSS class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MessageKind {
    #[default]
    Info,
    Error,
}

impl MessageKind {
    pub fn css_class(self) -> &'static str {
        match self {
            MessageKind::Info => "info",
            MessageKind::Error => "error",
        }
    }

    /// Full class attribute of a toast element
    pub fn class_list(self) -> String {
        format!("message {} fade-in", self.css_class())
    }
}

/// Toast timing and container handling
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Messages {
    display_ms: u32,
    fade_ms: u32,
}

impl Messages {
    pub fn new(config: &UiConfig) -> Self {
        Self {
            display_ms: config.message_display_ms,
            fade_ms: config.message_fade_ms,
        }
    }

    /// Upper bound for a message's time in the DOM
    pub fn lifetime_ms(&self) -> u32 {
        self.display_ms + self.fade_ms
    }

    /// Schedule removal of every message already on the page
    pub fn sweep_existing(&self) -> usize {
        let existing = dom::query_all(".message");
        for message in &existing {
            self.schedule_dismiss(message);
        }
        existing.len()
    }

    /// Show `text` as a new toast
    pub fn show(&self, text: &str, kind: MessageKind) -> UiResult<Element> {
        let container = self.container()?;
        let doc = dom::document()?;
        let message = doc.create_element("div")?;
        message.set_class_name(&kind.class_list());
        message.set_text_content(Some(text));
        container.append_child(&message)?;
        self.schedule_dismiss(&message);
        log::debug!("{} message shown: {}", kind.css_class(), text);
        Ok(message)
    }

    /// Show a toast, logging instead of failing when the DOM is unusable
    pub fn notify(&self, text: &str, kind: MessageKind) {
        if let Err(e) = self.show(text, kind) {
            log::error!("could not show message '{}': {}", text, e);
        }
    }

    /// The single `.messages` container, created under `<body>` if absent
    pub fn container(&self) -> UiResult<Element> {
        if let Some(existing) = dom::query(".messages") {
            return Ok(existing);
        }
        let doc = dom::document()?;
        let body = doc.body().ok_or(UiError::MissingElement("body"))?;
        let container = doc.create_element("div")?;
        container.set_class_name("messages");
        body.append_child(&container)?;
        Ok(container)
    }

    fn schedule_dismiss(&self, message: &Element) {
        let fade_ms = self.fade_ms;
        let timed = message.clone();
        dom::after(self.display_ms, move || fade_out(&timed, fade_ms));
        // Tapping a message dismisses it early
        let tapped = message.clone();
        let _ = dom::listen_once(message.as_ref(), "click", move || fade_out(&tapped, fade_ms));
    }
}

fn fade_out(message: &Element, fade_ms: u32) {
    // Already detached by an earlier dismissal
    if !message.is_connected() {
        return;
    }
    dom::set_style(message, "opacity", "0");
    let message = message.clone();
    dom::after(fade_ms, move || message.remove());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_classes() {
        assert_eq!(MessageKind::Error.class_list(), "message error fade-in");
        assert_eq!(MessageKind::default().class_list(), "message info fade-in");
    }

    #[test]
    fn test_lifetime_is_display_plus_fade() {
        let messages = Messages::new(&UiConfig::default());
        assert_eq!(messages.lifetime_ms(), 5300);
    }
}
