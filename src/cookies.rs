//! Cookie Access
//!
//! Reads named cookies (the CSRF token) from a cookie string.

use percent_encoding::percent_decode_str;
use wasm_bindgen::JsCast;

/// Source of a raw `name=value; name2=value2` cookie string
pub trait CookieSource {
    fn cookie_string(&self) -> Option<String>;
}

/// Cookies of the current document
pub struct DocumentCookies;

impl CookieSource for DocumentCookies {
    fn cookie_string(&self) -> Option<String> {
        web_sys::window()?
            .document()?
            .dyn_into::<web_sys::HtmlDocument>()
            .ok()?
            .cookie()
            .ok()
    }
}

impl CookieSource for &str {
    fn cookie_string(&self) -> Option<String> {
        Some(self.to_string())
    }
}

/// Value of cookie `name` in `raw`, percent-decoded
pub fn find_cookie(raw: &str, name: &str) -> Option<String> {
    if name.is_empty() {
        return None;
    }
    raw.split(';')
        .map(str::trim)
        .find_map(|pair| {
            pair.strip_prefix(name)
                .and_then(|rest| rest.strip_prefix('='))
        })
        .map(|value| percent_decode_str(value).decode_utf8_lossy().into_owned())
}

pub fn csrf_token(source: &impl CookieSource, name: &str) -> Option<String> {
    let raw = source.cookie_string()?;
    find_cookie(&raw, name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finds_cookie_among_others() {
        let raw = "sessionid=abc; csrftoken=tok123; theme=dark";
        assert_eq!(find_cookie(raw, "csrftoken").as_deref(), Some("tok123"));
    }

    #[test]
    fn test_prefix_must_match_whole_name() {
        let raw = "xcsrftoken=wrong; csrftokenx=wrong2";
        assert_eq!(find_cookie(raw, "csrftoken"), None);
    }

    #[test]
    fn test_value_is_percent_decoded() {
        assert_eq!(find_cookie("name=a%20b%3D", "name").as_deref(), Some("a b="));
    }

    #[test]
    fn test_first_occurrence_wins() {
        assert_eq!(find_cookie("a=1; a=2", "a").as_deref(), Some("1"));
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(find_cookie("", "csrftoken"), None);
        assert_eq!(find_cookie("a=1", ""), None);
        assert_eq!(find_cookie("csrftoken=", "csrftoken").as_deref(), Some(""));
    }

    #[test]
    fn test_csrf_token_from_source() {
        let source = "csrftoken=xyz";
        assert_eq!(csrf_token(&source, "csrftoken").as_deref(), Some("xyz"));
    }
}
