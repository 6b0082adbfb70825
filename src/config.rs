//! Page Configuration
//!
//! Endpoints, timings and message texts. Defaults match the server
//! templates; `<body data-*>` attributes may override a subset.

/// Runtime settings for all page regions
#[derive(Debug, Clone, PartialEq)]
pub struct UiConfig {
    /// POST endpoint rendering the children sub-form
    pub children_endpoint: String,
    pub csrf_cookie: String,
    pub csrf_header: String,
    pub service_worker_path: String,
    /// How long a message stays fully visible
    pub message_display_ms: u32,
    /// Fade-out before a message is detached
    pub message_fade_ms: u32,
    /// Press feedback on the barcode card
    pub press_reset_ms: u32,
    pub debug: bool,
    pub texts: Texts,
}

/// User-facing strings
#[derive(Debug, Clone, PartialEq)]
pub struct Texts {
    pub required_fields: String,
    pub children_load_failed: String,
}

impl Default for Texts {
    fn default() -> Self {
        Self {
            required_fields: "Lütfen tüm gerekli alanları doldurun!".to_string(),
            children_load_failed: "Çocuk form alanları yüklenemedi".to_string(),
        }
    }
}

impl Texts {
    /// Generic failure toast
    pub fn children_failure(&self) -> String {
        format!("{}!", self.children_load_failed)
    }

    /// Failure toast carrying the server's message
    pub fn children_server_error(&self, message: &str) -> String {
        format!("{}: {}", self.children_load_failed, message)
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            children_endpoint: "/ajax/children-count/".to_string(),
            csrf_cookie: "csrftoken".to_string(),
            csrf_header: "X-CSRFToken".to_string(),
            service_worker_path: "/static/web/js/sw.js".to_string(),
            message_display_ms: 5000,
            message_fade_ms: 300,
            press_reset_ms: 150,
            debug: false,
            texts: Texts::default(),
        }
    }
}

impl UiConfig {
    /// Apply overrides from an attribute lookup (`data-*` name -> value)
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        if let Some(endpoint) = non_empty("data-children-endpoint") {
            self.children_endpoint = endpoint;
        }
        if let Some(path) = non_empty("data-service-worker") {
            self.service_worker_path = path;
        }
        if let Some(cookie) = non_empty("data-csrf-cookie") {
            self.csrf_cookie = cookie;
        }
        // Presence alone enables debug logging
        if lookup("data-debug").is_some() {
            self.debug = true;
        }
        self
    }

    pub fn log_level(&self) -> log::Level {
        if self.debug {
            log::Level::Debug
        } else {
            log::Level::Info
        }
    }

    /// Defaults plus whatever the document body declares
    pub fn from_document() -> Self {
        let body = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body());
        match body {
            Some(body) => Self::default().with_overrides(|name| body.get_attribute(name)),
            None => Self::default(),
        }
    }
}
