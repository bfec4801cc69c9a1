//! Page metadata bootstrap: CSRF token and header name from `<meta>` tags.

use std::time::Duration;

use scraper::{Html, Selector};

/// `name` attribute carrying the CSRF token.
pub const CSRF_TOKEN_META: &str = "_csrf";
/// `name` attribute carrying the CSRF header name.
pub const CSRF_HEADER_META: &str = "_csrf_header";

/// What: Return the `content` of the first `<meta>` whose `name` equals `name`.
///
/// Inputs:
/// - `doc`: Parsed HTML document.
/// - `name`: Exact (case-sensitive) value of the `name` attribute.
///
/// Output:
/// - Content of the first match in document order; empty string when no tag
///   matches or the match has no `content` attribute.
#[must_use]
pub fn get_meta(doc: &Html, name: &str) -> String {
    let Ok(selector) = Selector::parse("meta") else {
        return String::new();
    };
    doc.select(&selector)
        .find(|el| el.value().attr("name") == Some(name))
        .and_then(|el| el.value().attr("content"))
        .map(ToString::to_string)
        .unwrap_or_default()
}

/// CSRF token/header pair read once at startup.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageMetadata {
    /// Token value (`<meta name="_csrf">`).
    pub csrf_token: String,
    /// Header name the token travels in (`<meta name="_csrf_header">`).
    pub csrf_header: String,
}

impl PageMetadata {
    /// What: Extract both CSRF values from an HTML page.
    ///
    /// Inputs:
    /// - `html`: Full page source.
    ///
    /// Output:
    /// - Metadata with missing values left empty.
    #[must_use]
    pub fn from_html(html: &str) -> Self {
        let doc = Html::parse_document(html);
        Self {
            csrf_token: get_meta(&doc, CSRF_TOKEN_META),
            csrf_header: get_meta(&doc, CSRF_HEADER_META),
        }
    }

    /// `(header, token)` when both values are present.
    #[must_use]
    pub fn header_pair(&self) -> Option<(&str, &str)> {
        if self.csrf_header.trim().is_empty() || self.csrf_token.is_empty() {
            return None;
        }
        Some((self.csrf_header.trim(), self.csrf_token.as_str()))
    }

    /// What: Load metadata from a page URL or a local HTML file.
    ///
    /// Inputs:
    /// - `source`: `http(s)://` URL, filesystem path, or `None`.
    ///
    /// Output:
    /// - Parsed metadata; empty metadata on any failure.
    ///
    /// Details:
    /// - Never fails: errors are logged and the client runs without CSRF values.
    pub async fn load(source: Option<&str>) -> Self {
        let Some(src) = source.map(str::trim).filter(|s| !s.is_empty()) else {
            tracing::debug!("no metadata source configured");
            return Self::default();
        };
        let html = if src.starts_with("http://") || src.starts_with("https://") {
            fetch_page(src).await
        } else {
            let path = src.to_string();
            match tokio::task::spawn_blocking(move || std::fs::read_to_string(path)).await {
                Ok(Ok(body)) => Ok(body),
                Ok(Err(e)) => Err(format!("Failed to read {src}: {e}")),
                Err(e) => Err(format!("read task failed: {e}")),
            }
        };
        match html {
            Ok(body) => {
                let meta = Self::from_html(&body);
                tracing::info!(
                    source = %src,
                    has_token = !meta.csrf_token.is_empty(),
                    header = %meta.csrf_header,
                    "page metadata loaded"
                );
                meta
            }
            Err(e) => {
                tracing::warn!(source = %src, error = %e, "page metadata unavailable");
                Self::default()
            }
        }
    }
}

/// Fetch the metadata page body.
async fn fetch_page(url: &str) -> Result<String, String> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(10))
        .build()
        .map_err(|e| format!("Failed to create HTTP client: {e}"))?;
    let resp = client
        .get(url)
        .send()
        .await
        .map_err(|e| format!("Network error: {e}"))?;
    if !resp.status().is_success() {
        return Err(format!("HTTP error: {}", resp.status()));
    }
    resp.text()
        .await
        .map_err(|e| format!("Failed to read response: {e}"))
}
