//! Search transport: one form-encoded POST per phrase, reply classified into a
//! [`SearchOutcome`].

use std::fmt;
use std::time::Duration;

use crate::sources::meta::PageMetadata;
use crate::state::{ResultItem, SearchOutcome};

/// Default search endpoint.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:80/api";

/// Name of the single form field carrying the phrase.
pub const SEARCH_FIELD: &str = "search";

/// Errors for requests that produced no usable match list.
#[derive(Debug)]
pub enum SearchError {
    /// Request could not be sent or no response arrived (includes timeouts).
    Transport(String),
    /// A 200 response whose body is not a match list.
    Decode(String),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport(msg) => write!(f, "transport error: {msg}"),
            Self::Decode(msg) => write!(f, "invalid response body: {msg}"),
        }
    }
}

impl std::error::Error for SearchError {}

/// Everything a request needs besides the phrase.
#[derive(Clone, Debug)]
pub struct SearchConfig {
    /// URL the phrase is posted to.
    pub endpoint: String,
    /// `(header, token)` attached to every request, when set.
    pub csrf: Option<(String, String)>,
    /// Whole-request timeout; `None` waits forever.
    pub timeout: Option<Duration>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            csrf: None,
            timeout: None,
        }
    }
}

impl SearchConfig {
    /// What: Assemble request settings from resolved options and page metadata.
    ///
    /// Inputs:
    /// - `endpoint`: Target URL.
    /// - `meta`: Metadata read at startup.
    /// - `attach_csrf`: Whether the CSRF header should be sent when available.
    /// - `timeout_secs`: Request timeout; `0` disables it.
    #[must_use]
    pub fn new(endpoint: &str, meta: &PageMetadata, attach_csrf: bool, timeout_secs: u64) -> Self {
        let csrf = if attach_csrf {
            meta.header_pair()
                .map(|(h, t)| (h.to_string(), t.to_string()))
        } else {
            None
        };
        Self {
            endpoint: endpoint.to_string(),
            csrf,
            timeout: (timeout_secs > 0).then(|| Duration::from_secs(timeout_secs)),
        }
    }

    /// What: Build the HTTP client used for every search request.
    ///
    /// Output:
    /// - Client with the configured timeout; a default client if building fails.
    #[must_use]
    pub fn client(&self) -> reqwest::Client {
        let mut builder = reqwest::Client::builder().user_agent(format!(
            "phrasefind/{}",
            env!("CARGO_PKG_VERSION")
        ));
        if let Some(t) = self.timeout {
            builder = builder.timeout(t);
        }
        builder.build().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "failed to build HTTP client; using defaults");
            reqwest::Client::new()
        })
    }
}

/// What: Post `phrase` to the search endpoint and classify the reply.
///
/// Inputs:
/// - `client`: Shared HTTP client.
/// - `cfg`: Endpoint, CSRF pair and timeout.
/// - `phrase`: Already validated phrase.
///
/// Output:
/// - [`SearchOutcome`] for the reply; never panics.
///
/// Details:
/// - Body is `search=<phrase>`, form-encoded (spaces become `+`).
/// - A 200 body of `null` is treated as an empty list.
pub async fn submit_search(
    client: &reqwest::Client,
    cfg: &SearchConfig,
    phrase: &str,
) -> SearchOutcome {
    let mut req = client
        .post(&cfg.endpoint)
        .form(&[(SEARCH_FIELD, phrase)]);
    if let Some((header, token)) = &cfg.csrf {
        req = req.header(header.as_str(), token.as_str());
    }
    let resp = match req.send().await {
        Ok(r) => r,
        Err(e) => {
            return SearchOutcome::Failed(SearchError::Transport(e.to_string()));
        }
    };
    match resp.status().as_u16() {
        200 => match resp.text().await {
            Ok(body) => match decode_results(&body) {
                Ok(items) => SearchOutcome::Success(items),
                Err(e) => SearchOutcome::Failed(e),
            },
            Err(e) => SearchOutcome::Failed(SearchError::Transport(e.to_string())),
        },
        400 => SearchOutcome::Rejected,
        code => SearchOutcome::UnexpectedStatus(code),
    }
}

/// What: Decode a 200 body into match rows.
///
/// Inputs:
/// - `body`: Raw JSON text.
///
/// Output:
/// - Rows in server order, or [`SearchError::Decode`].
///
/// # Errors
/// - Returns `Err` when the body is not a JSON array of match objects.
pub fn decode_results(body: &str) -> Result<Vec<ResultItem>, SearchError> {
    serde_json::from_str::<Option<Vec<ResultItem>>>(body)
        .map(Option::unwrap_or_default)
        .map_err(|e| SearchError::Decode(e.to_string()))
}
