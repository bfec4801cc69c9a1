//! Core value types used by phrasefind state.

use serde::Deserialize;

/// One match reported by the search service.
///
/// Decoded from a response entry shaped as
/// `{"Filename": "...", "Count": 3, "Spacing": 0.5}`; field names are
/// case-sensitive.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ResultItem {
    /// Name of the matching file.
    #[serde(rename = "Filename")]
    pub filename: String,
    /// Number of phrase words found in the file.
    #[serde(rename = "Count")]
    pub count: i64,
    /// Proximity score reported by the service.
    #[serde(rename = "Spacing")]
    pub proximity: f64,
}

impl ResultItem {
    /// What: Build a result row from its three display values.
    ///
    /// Inputs:
    /// - `filename`, `count`, `proximity`: Values shown in the row.
    ///
    /// Output:
    /// - Owned `ResultItem`.
    pub fn new(filename: impl Into<String>, count: i64, proximity: f64) -> Self {
        Self {
            filename: filename.into(),
            count,
            proximity,
        }
    }
}

/// Search request sent to the background search worker.
#[derive(Clone, Debug)]
pub struct QueryInput {
    /// Monotonic identifier used to correlate responses.
    pub id: u64,
    /// Validated phrase captured from the input line.
    pub text: String,
}

/// Classified reply for a single search request.
#[derive(Debug)]
pub enum SearchOutcome {
    /// HTTP 200 with a decodable match list, in server order.
    Success(Vec<ResultItem>),
    /// HTTP 400: the service rejected the phrase.
    Rejected,
    /// Any status other than 200 or 400.
    UnexpectedStatus(u16),
    /// No usable response (connect error, timeout, undecodable body).
    Failed(crate::sources::SearchError),
}

/// Completion for a prior [`QueryInput`].
#[derive(Debug)]
pub struct SearchCompletion {
    /// Echoed identifier from the originating query.
    pub id: u64,
    /// Phrase that was submitted.
    pub phrase: String,
    /// What came back.
    pub outcome: SearchOutcome,
}

/// Terminal state reached by the form controller for one completion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormState {
    /// Results rendered.
    Success,
    /// Service answered 400.
    ClientError,
    /// Non-200/non-400 status, transport failure or undecodable body.
    Rejected,
    /// Completion belonged to a superseded request and was dropped.
    Stale,
}

/// User-visible notice kinds raised by the form controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Notice {
    /// Phrase failed local validation.
    InvalidInput,
    /// Service answered 400.
    IncorrectData,
    /// Service answered with some other non-200 status.
    UnexpectedStatus(u16),
    /// No response could be obtained.
    Unreachable,
    /// 200 response whose body was not a match list.
    MalformedResponse,
}

impl Notice {
    /// What: Text shown in the alert modal for this notice.
    ///
    /// Output:
    /// - Owned message string.
    #[must_use]
    pub fn message(self) -> String {
        match self {
            Self::InvalidInput => "Input data is not valid".to_string(),
            Self::IncorrectData => "Incorrect data".to_string(),
            Self::UnexpectedStatus(code) => format!("Unexpected server response (HTTP {code})"),
            Self::Unreachable => "Search service unreachable".to_string(),
            Self::MalformedResponse => "Malformed search response".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Decode the wire shape of a single match.
    ///
    /// Inputs:
    /// - JSON object with `Filename`, `Count`, `Spacing`.
    ///
    /// Output:
    /// - Fields land on `filename`, `count`, `proximity`.
    fn result_item_decodes_capitalized_fields() {
        let raw = r#"[{"Filename":"a.go","Count":3,"Spacing":0.5}]"#;
        let items: Vec<ResultItem> = serde_json::from_str(raw).expect("decode");
        assert_eq!(items, vec![ResultItem::new("a.go", 3, 0.5)]);
    }

    #[test]
    /// What: Integer spacing values from the service still decode.
    fn result_item_accepts_integer_spacing() {
        let raw = r#"{"Filename":"b.txt","Count":1,"Spacing":2}"#;
        let item: ResultItem = serde_json::from_str(raw).expect("decode");
        assert!((item.proximity - 2.0).abs() < f64::EPSILON);
        assert_eq!(item.proximity.to_string(), "2");
    }

    #[test]
    /// What: Lower-case field names are not accepted.
    fn result_item_field_names_are_case_sensitive() {
        let raw = r#"{"filename":"a.go","count":3,"spacing":0.5}"#;
        assert!(serde_json::from_str::<ResultItem>(raw).is_err());
    }

    #[test]
    fn notice_messages_match_alert_text() {
        assert_eq!(Notice::InvalidInput.message(), "Input data is not valid");
        assert_eq!(Notice::IncorrectData.message(), "Incorrect data");
        assert_eq!(
            Notice::UnexpectedStatus(503).message(),
            "Unexpected server response (HTTP 503)"
        );
    }
}
