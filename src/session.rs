//! Query session controller: the request-lifecycle state machine.
//!
//! The session owns the live query, the current hit list, and the token set
//! used for highlighting. It performs no I/O of its own; the caller forwards
//! the request returned by [`Session::begin_submit`] to the transport worker
//! and feeds the completion back through [`Session::complete`]. That keeps
//! exactly one writer for all session state.

use crate::search::{SearchError, SearchRequest};
use crate::tokenize::tokenize_query;
use crate::types::{CombinationMode, Query, SearchHit, SearchResponse};

/// The one user-facing failure message. Root causes go to the log only.
pub const GENERIC_FAILURE_MESSAGE: &str =
    "Could not reach the search service. Please try again later.";

/// Lifecycle of the current search exchange. Exactly one variant is active
/// at a time.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Idle,
    Loading,
    Success { processing_time: f64 },
    Failed { message: String },
}

/// State machine driving one interactive search session.
#[derive(Debug)]
pub struct Session {
    query: Query,
    state: SessionState,
    hits: Vec<SearchHit>,
    tokens: Vec<String>,
    in_flight: Option<String>,
    next_request_id: u64,
    current_request_id: Option<u64>,
}

impl Session {
    #[must_use]
    pub fn new(query: Query) -> Self {
        Self {
            query,
            state: SessionState::Idle,
            hits: Vec::new(),
            tokens: Vec::new(),
            in_flight: None,
            next_request_id: 0,
            current_request_id: None,
        }
    }

    /// Replace the query text. Pure state update; never affects an in-flight
    /// request, which captured its own snapshot.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.query.text = text.into();
    }

    /// Replace the combination mode. Pure state update.
    pub fn set_mode(&mut self, mode: CombinationMode) {
        self.query.mode = mode;
    }

    /// Start a submission for the current query.
    ///
    /// An empty query is allowed and forwarded as-is; the backend owns that
    /// contract. While a request is outstanding this is a no-op returning
    /// `None`, so overlapping submissions cannot be issued. On success the
    /// prior error and processing-time display are cleared, the state moves
    /// to Loading, and the returned request carries a snapshot of the query
    /// tagged with a fresh id.
    pub fn begin_submit(&mut self) -> Option<(u64, SearchRequest)> {
        if matches!(self.state, SessionState::Loading) {
            return None;
        }

        self.next_request_id += 1;
        let id = self.next_request_id;
        self.current_request_id = Some(id);
        self.in_flight = Some(self.query.text.clone());
        self.state = SessionState::Loading;
        Some((id, SearchRequest::from(&self.query)))
    }

    /// Apply the outcome of a submitted request.
    ///
    /// Completions whose id does not match the outstanding request are
    /// dropped; a late event for a superseded submission can never clobber
    /// current state. On success the hit list is replaced wholesale and the
    /// token set is recomputed from the *submitted* snapshot, not from any
    /// text typed since. On failure the previous hits and tokens are left
    /// untouched and only the fixed generic message is surfaced.
    pub fn complete(&mut self, id: u64, outcome: Result<SearchResponse, SearchError>) {
        if self.current_request_id != Some(id) {
            return;
        }
        self.current_request_id = None;
        let submitted = self.in_flight.take().unwrap_or_default();

        match outcome {
            Ok(response) => {
                self.hits = response.results;
                self.tokens = tokenize_query(&submitted);
                self.state = SessionState::Success {
                    processing_time: response.processing_time,
                };
            }
            Err(_) => {
                self.state = SessionState::Failed {
                    message: GENERIC_FAILURE_MESSAGE.to_string(),
                };
            }
        }
    }

    #[must_use]
    pub fn query(&self) -> &Query {
        &self.query
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.state, SessionState::Loading)
    }

    /// Ranked hits from the last successful response.
    #[must_use]
    pub fn hits(&self) -> &[SearchHit] {
        &self.hits
    }

    /// Token set derived from the last successfully submitted query.
    #[must_use]
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match &self.state {
            SessionState::Failed { message } => Some(message),
            _ => None,
        }
    }

    /// Backend processing time of the last successful response, formatted
    /// with four fractional digits.
    #[must_use]
    pub fn processing_time_display(&self) -> Option<String> {
        match &self.state {
            SessionState::Success { processing_time } => Some(format!("{processing_time:.4}")),
            _ => None,
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Query::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DocId;
    use reqwest::StatusCode;

    fn response_with_cat() -> SearchResponse {
        SearchResponse {
            results: vec![SearchHit {
                doc_id: DocId::Number(7),
                score: 0.42,
                snippet: "the cat sat".to_string(),
            }],
            processing_time: 0.12345,
        }
    }

    fn failure() -> SearchError {
        SearchError::Status(StatusCode::BAD_GATEWAY)
    }

    #[test]
    fn submit_serializes_query_and_mode() {
        let mut session = Session::new(Query::new(
            "machine learning",
            CombinationMode::Conjunctive,
        ));
        let (_, request) = session.begin_submit().unwrap();
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({"query": "machine learning", "mode": "1"})
        );
    }

    #[test]
    fn successful_completion_populates_session() {
        let mut session = Session::new(Query::new("the cat", CombinationMode::Conjunctive));
        let (id, _) = session.begin_submit().unwrap();
        assert!(session.is_loading());

        session.complete(id, Ok(response_with_cat()));

        assert!(matches!(session.state(), SessionState::Success { .. }));
        assert_eq!(session.processing_time_display().as_deref(), Some("0.1235"));
        assert_eq!(session.hits().len(), 1);
        assert_eq!(session.hits()[0].doc_id, DocId::Number(7));
        assert_eq!(session.tokens(), ["the", "cat"]);
    }

    #[test]
    fn tokens_come_from_submitted_snapshot_not_later_edits() {
        let mut session = Session::new(Query::new("the cat", CombinationMode::Conjunctive));
        let (id, _) = session.begin_submit().unwrap();

        // The user keeps typing while the request is in flight.
        session.set_text("something else entirely");
        session.complete(id, Ok(response_with_cat()));

        assert_eq!(session.tokens(), ["the", "cat"]);
        assert_eq!(session.query().text, "something else entirely");
    }

    #[test]
    fn failure_keeps_previous_hits_and_tokens() {
        let mut session = Session::new(Query::new("the cat", CombinationMode::Conjunctive));
        let (id, _) = session.begin_submit().unwrap();
        session.complete(id, Ok(response_with_cat()));

        let (retry_id, _) = session.begin_submit().unwrap();
        session.complete(retry_id, Err(failure()));

        assert_eq!(session.error_message(), Some(GENERIC_FAILURE_MESSAGE));
        assert_eq!(session.hits().len(), 1);
        assert_eq!(session.tokens(), ["the", "cat"]);
        assert_eq!(session.processing_time_display(), None);
    }

    #[test]
    fn submit_while_loading_is_a_no_op() {
        let mut session = Session::default();
        let first = session.begin_submit();
        assert!(first.is_some());
        assert!(session.begin_submit().is_none());
        assert!(session.is_loading());
    }

    #[test]
    fn stale_completion_is_dropped() {
        let mut session = Session::new(Query::new("the cat", CombinationMode::Conjunctive));
        let (id, _) = session.begin_submit().unwrap();

        session.complete(id + 1, Ok(response_with_cat()));
        assert!(session.is_loading());
        assert!(session.hits().is_empty());

        session.complete(id, Ok(response_with_cat()));
        assert!(matches!(session.state(), SessionState::Success { .. }));
    }

    #[test]
    fn empty_query_is_forwarded_as_is() {
        let mut session = Session::default();
        let (_, request) = session.begin_submit().unwrap();
        assert_eq!(request.query, "");
        assert_eq!(request.mode, "1");
    }

    #[test]
    fn resubmission_clears_error_and_timing() {
        let mut session = Session::default();
        let (id, _) = session.begin_submit().unwrap();
        session.complete(id, Err(failure()));
        assert!(session.error_message().is_some());

        session.begin_submit().unwrap();
        assert!(session.error_message().is_none());
        assert_eq!(session.processing_time_display(), None);
        assert!(session.is_loading());
    }

    #[test]
    fn query_tokenizing_to_nothing_disables_highlighting() {
        let mut session = Session::new(Query::new("!!! ???", CombinationMode::Disjunctive));
        let (id, request) = session.begin_submit().unwrap();
        assert_eq!(request.mode, "2");
        session.complete(id, Ok(response_with_cat()));
        assert!(session.tokens().is_empty());
    }
}
