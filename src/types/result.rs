use std::fmt;

use serde::Deserialize;

/// Document identifier as returned by the backend. Some deployments report
/// numeric ids, others opaque strings; both decode transparently.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum DocId {
    Number(i64),
    Text(String),
}

impl fmt::Display for DocId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocId::Number(id) => write!(f, "{id}"),
            DocId::Text(id) => f.write_str(id),
        }
    }
}

/// One ranked result from the search backend. Immutable once received; the
/// hit list is replaced wholesale on each successful response.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchHit {
    #[serde(rename = "docID")]
    pub doc_id: DocId,
    pub score: f64,
    pub snippet: String,
}

/// Successful response body for one search exchange.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<SearchHit>,
    /// Backend-side processing time in fractional seconds.
    pub processing_time: f64,
}
