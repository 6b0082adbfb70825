//! Children Fragment Fetcher
//!
//! Asks the server for the children sub-form markup and injects it into
//! `#children_container`. Only the most recent request's response is applied.

use std::cell::Cell;
use std::rc::Rc;

use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use web_sys::HtmlElement;

use crate::config::{Texts, UiConfig};
use crate::cookies::{self, DocumentCookies};
use crate::dom;
use crate::error::{UiError, UiResult};
use crate::messages::{MessageKind, Messages};

pub const CONTAINER_ID: &str = "children_container";

// ========================
// Wire Format
// ========================

#[derive(Debug, Serialize)]
pub struct ChildrenCountRequest {
    pub children_count: u32,
}

/// Server reply: `{"html": ...}` or `{"error": ...}`
#[derive(Debug, Default, Deserialize)]
pub struct FragmentEnvelope {
    pub html: Option<String>,
    pub error: Option<String>,
}

/// Result of one fragment request
#[derive(Debug)]
pub enum FragmentOutcome {
    /// Markup to inject (possibly empty)
    Html(String),
    /// Server handled the request and reported a problem
    ServerError(String),
    /// Transport failure or unusable response
    Failure(UiError),
}

impl FragmentOutcome {
    pub fn from_envelope(envelope: FragmentEnvelope) -> Self {
        match (envelope.html, envelope.error) {
            (Some(html), _) => FragmentOutcome::Html(html),
            (None, Some(error)) => FragmentOutcome::ServerError(error),
            (None, None) => FragmentOutcome::Failure(UiError::Decode(
                "response has neither html nor error".to_string(),
            )),
        }
    }

    pub fn from_body(body: &str) -> Self {
        match serde_json::from_str::<FragmentEnvelope>(body) {
            Ok(envelope) => Self::from_envelope(envelope),
            Err(e) => FragmentOutcome::Failure(UiError::Decode(e.to_string())),
        }
    }
}

// ========================
// Request Sequencing
// ========================

/// Monotonic ticket counter; a response is applied only if its ticket is
/// still the latest one issued.
#[derive(Debug, Clone, Default)]
pub struct RequestGenerations {
    latest: Rc<Cell<u64>>,
}

impl RequestGenerations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the ticket for a new request
    pub fn next(&self) -> u64 {
        let ticket = self.latest.get() + 1;
        self.latest.set(ticket);
        ticket
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.latest.get() == ticket
    }
}

// ========================
// Fetcher
// ========================

/// Fetches and applies children sub-form markup
#[derive(Clone)]
pub struct ChildrenFragments {
    endpoint: String,
    csrf_cookie: String,
    csrf_header: String,
    messages: Messages,
    texts: Texts,
    generations: RequestGenerations,
}

impl ChildrenFragments {
    pub fn new(config: &UiConfig, messages: Messages) -> Self {
        Self {
            endpoint: config.children_endpoint.clone(),
            csrf_cookie: config.csrf_cookie.clone(),
            csrf_header: config.csrf_header.clone(),
            messages,
            texts: config.texts.clone(),
            generations: RequestGenerations::new(),
        }
    }

    /// Fire-and-forget update for a newly selected count
    pub fn update_children_fields(&self, count: u32) {
        let Some(container) = dom::by_id::<HtmlElement>(CONTAINER_ID) else {
            log::error!("#{} not found, children fields not updated", CONTAINER_ID);
            return;
        };
        let ticket = self.generations.next();
        log::debug!("requesting children fields, count={} ticket={}", count, ticket);

        let this = self.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = this.fetch(count).await;
            if !this.generations.is_current(ticket) {
                log::debug!("dropping stale response for ticket {}", ticket);
                return;
            }
            this.apply(&container, count, outcome);
        });
    }

    async fn fetch(&self, count: u32) -> FragmentOutcome {
        match self.send(count).await {
            Ok(body) => FragmentOutcome::from_body(&body),
            Err(e) => FragmentOutcome::Failure(e),
        }
    }

    async fn send(&self, count: u32) -> UiResult<String> {
        let mut request = Request::post(&self.endpoint);
        match cookies::csrf_token(&DocumentCookies, &self.csrf_cookie) {
            Some(token) => request = request.header(&self.csrf_header, &token),
            None => log::warn!("cookie '{}' missing, sending without CSRF token", self.csrf_cookie),
        }
        // `json` also sets Content-Type: application/json
        let response = request
            .json(&ChildrenCountRequest { children_count: count })?
            .send()
            .await?;
        log::debug!("children fields response status {}", response.status());
        // Error statuses still carry an {"error": ...} envelope
        Ok(response.text().await?)
    }

    /// Invalidate any request in flight; its response will be dropped
    pub fn cancel_pending(&self) {
        let ticket = self.generations.next();
        log::debug!("pending children requests cancelled (ticket {})", ticket);
    }

    fn apply(&self, container: &HtmlElement, count: u32, outcome: FragmentOutcome) {
        match ApplyStep::plan(count, outcome, &self.texts) {
            ApplyStep::Replace { markup, display } => {
                container.set_inner_html(&markup);
                let _ = container.style().set_property("display", display);
                log::debug!("children fields replaced ({} bytes)", markup.len());
            }
            ApplyStep::Toast(text) => self.messages.notify(&text, MessageKind::Error),
        }
    }
}

/// What a response does to the page
#[derive(Debug, PartialEq)]
pub enum ApplyStep {
    /// New container content and its `display` value
    Replace { markup: String, display: &'static str },
    /// Container untouched, one error toast
    Toast(String),
}

impl ApplyStep {
    pub fn plan(count: u32, outcome: FragmentOutcome, texts: &Texts) -> Self {
        match outcome {
            FragmentOutcome::Html(markup) => ApplyStep::Replace {
                markup,
                display: display_for(count),
            },
            FragmentOutcome::ServerError(message) => {
                log::error!("server error: {}", message);
                ApplyStep::Toast(texts.children_server_error(&message))
            }
            FragmentOutcome::Failure(e) => {
                log::error!("children fields request failed: {}", e);
                ApplyStep::Toast(texts.children_failure())
            }
        }
    }
}

/// The container is only shown when there is at least one child
pub fn display_for(count: u32) -> &'static str {
    if count > 0 {
        "block"
    } else {
        "none"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_shape() {
        let body = serde_json::to_string(&ChildrenCountRequest { children_count: 2 }).unwrap();
        assert_eq!(body, r#"{"children_count":2}"#);
    }

    #[test]
    fn test_html_envelope() {
        match FragmentOutcome::from_body(r#"{"html": "<div>x</div>"}"#) {
            FragmentOutcome::Html(markup) => assert_eq!(markup, "<div>x</div>"),
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_empty_html_is_still_markup() {
        assert!(matches!(
            FragmentOutcome::from_body(r#"{"html": ""}"#),
            FragmentOutcome::Html(ref m) if m.is_empty()
        ));
    }

    #[test]
    fn test_error_envelope() {
        match FragmentOutcome::from_body(r#"{"error": "invalid literal"}"#) {
            FragmentOutcome::ServerError(message) => assert_eq!(message, "invalid literal"),
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_html_wins_over_error() {
        assert!(matches!(
            FragmentOutcome::from_body(r#"{"html": "<p></p>", "error": "x"}"#),
            FragmentOutcome::Html(_)
        ));
    }

    #[test]
    fn test_non_json_is_failure() {
        assert!(matches!(
            FragmentOutcome::from_body("<html>Server Error</html>"),
            FragmentOutcome::Failure(UiError::Decode(_))
        ));
    }

    #[test]
    fn test_empty_object_is_failure() {
        assert!(matches!(
            FragmentOutcome::from_body("{}"),
            FragmentOutcome::Failure(_)
        ));
    }

    #[test]
    fn test_only_latest_ticket_is_current() {
        let generations = RequestGenerations::new();
        let first = generations.next();
        let second = generations.next();
        assert!(!generations.is_current(first));
        assert!(generations.is_current(second));
    }

    #[test]
    fn test_generations_shared_between_clones() {
        let generations = RequestGenerations::new();
        let handle = generations.clone();
        let ticket = generations.next();
        assert!(handle.is_current(ticket));
        handle.next();
        assert!(!generations.is_current(ticket));
    }

    #[test]
    fn test_markup_shown_for_positive_count() {
        let outcome = FragmentOutcome::from_body(r#"{"html": "<div>x</div>"}"#);
        assert_eq!(
            ApplyStep::plan(2, outcome, &Texts::default()),
            ApplyStep::Replace { markup: "<div>x</div>".to_string(), display: "block" }
        );
    }

    #[test]
    fn test_markup_hidden_for_zero_count() {
        let outcome = FragmentOutcome::from_body(r#"{"html": "<div>x</div>"}"#);
        assert_eq!(
            ApplyStep::plan(0, outcome, &Texts::default()),
            ApplyStep::Replace { markup: "<div>x</div>".to_string(), display: "none" }
        );
    }

    #[test]
    fn test_transport_failure_only_toasts() {
        let outcome = FragmentOutcome::Failure(UiError::Transport("network down".to_string()));
        assert_eq!(
            ApplyStep::plan(2, outcome, &Texts::default()),
            ApplyStep::Toast("Çocuk form alanları yüklenemedi!".to_string())
        );
    }

    #[test]
    fn test_server_error_toast_carries_message() {
        let outcome = FragmentOutcome::from_body(r#"{"error": "bad count"}"#);
        assert_eq!(
            ApplyStep::plan(1, outcome, &Texts::default()),
            ApplyStep::Toast("Çocuk form alanları yüklenemedi: bad count".to_string())
        );
    }

    #[test]
    fn test_cancel_pending_invalidates_earlier_ticket() {
        let fragments = ChildrenFragments::new(&UiConfig::default(), Messages::new(&UiConfig::default()));
        let ticket = fragments.generations.next();
        assert!(fragments.generations.is_current(ticket));
        fragments.cancel_pending();
        assert!(!fragments.generations.is_current(ticket));
    }
}
