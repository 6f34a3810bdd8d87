//! Menu source service
//!
//! Fetches the JSON menu definition. The request itself only exists on
//! wasm32; during server-side rendering the widget renders its bare container
//! and the client re-fetches after hydration.

#[cfg(target_arch = "wasm32")]
use gloo_net::http::Request;

use crate::domain::models::MenuEntry;
use crate::shared::errors::{MenuError, Result};
use crate::shared::logging;

/// Decode a JSON body into menu entries, preserving array order.
pub fn parse_entries(body: &str) -> Result<Vec<MenuEntry>> {
    serde_json::from_str::<Vec<MenuEntry>>(body).map_err(|err| MenuError::Decode(err.to_string()))
}

// Service wrapping one fetch of the configured source path
pub struct MenuSource {
    source_url: String,
}

impl MenuSource {
    pub fn new(source_url: impl Into<String>) -> Self {
        Self {
            source_url: source_url.into(),
        }
    }

    pub fn source_url(&self) -> &str {
        &self.source_url
    }

    /// Fetch the menu definition once and decode it.
    ///
    /// Non-2xx statuses are fetch errors; a body that is not a JSON array of
    /// objects is a decode error. No retries, no timeout.
    #[cfg(target_arch = "wasm32")]
    pub async fn fetch_entries(&self) -> Result<Vec<MenuEntry>> {
        logging::log_menu_fetch_start(&self.source_url);

        let response = Request::get(&self.source_url)
            .send()
            .await
            .map_err(|err| MenuError::Fetch(err.to_string()))?;

        if !response.ok() {
            return Err(MenuError::Fetch(format!(
                "HTTP {}: {}",
                response.status(),
                response.status_text()
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|err| MenuError::Fetch(err.to_string()))?;

        let entries = parse_entries(&body)?;
        logging::log_menu_fetch_result(&self.source_url, entries.len());
        Ok(entries)
    }

    /// Server-side stub: no request is made during SSR.
    #[cfg(not(target_arch = "wasm32"))]
    pub async fn fetch_entries(&self) -> Result<Vec<MenuEntry>> {
        logging::log_menu_fetch_start(&self.source_url);
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_preserves_order() {
        let body = r#"[{"name":"Home","url":"/"},{"name":"About","url":"/about"}]"#;
        let entries = parse_entries(body).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "Home");
        assert_eq!(entries[0].url, "/");
        assert_eq!(entries[1].name, "About");
        assert_eq!(entries[1].url, "/about");
    }

    #[test]
    fn test_parse_empty_array() {
        let entries = parse_entries("[]").unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_parse_duplicates_preserved() {
        let body = r#"[{"name":"Docs","url":"/docs"},{"name":"Docs","url":"/docs"}]"#;
        let entries = parse_entries(body).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], entries[1]);
    }

    #[test]
    fn test_parse_non_array_is_decode_error() {
        let err = parse_entries(r#"{"name":"Home","url":"/"}"#).unwrap_err();
        assert!(matches!(err, MenuError::Decode(_)));
    }

    #[test]
    fn test_parse_invalid_json_is_decode_error() {
        let err = parse_entries("not json").unwrap_err();
        assert!(matches!(err, MenuError::Decode(_)));
    }

    #[test]
    fn test_source_url_accessor() {
        let source = MenuSource::new("/assets/menu.json");
        assert_eq!(source.source_url(), "/assets/menu.json");
    }
}
