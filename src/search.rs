//! Search transport: the wire contract and the worker thread that owns it.
//!
//! The blocking HTTP exchange happens on a dedicated worker so the UI thread
//! stays responsive while a request is outstanding. Commands and completion
//! events flow over `mpsc` channels; every submission carries the request id
//! assigned by the session so late completions can be recognized.

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::types::{Query, SearchResponse};

/// Request body for one search exchange. `mode` is the wire value of the
/// combination mode (`"1"` conjunctive, `"2"` disjunctive).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchRequest {
    pub query: String,
    pub mode: String,
}

impl From<&Query> for SearchRequest {
    fn from(query: &Query) -> Self {
        Self {
            query: query.text.clone(),
            mode: query.mode.wire_value().to_string(),
        }
    }
}

/// Failure taxonomy for one exchange. All variants surface to the user as
/// the same generic message; the distinction exists for the log.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("transport failure: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("search service returned status {0}")]
    Status(StatusCode),
    #[error("malformed search response: {0}")]
    Malformed(#[source] serde_json::Error),
}

/// Seam between the session plumbing and the actual backend exchange.
pub trait SearchClient {
    fn search(&self, request: &SearchRequest) -> Result<SearchResponse, SearchError>;
}

/// Production client: POSTs the request as JSON to the configured endpoint.
pub struct HttpClient {
    endpoint: String,
    http: Client,
}

impl HttpClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> anyhow::Result<Self> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            endpoint: endpoint.into(),
            http,
        })
    }
}

impl SearchClient for HttpClient {
    fn search(&self, request: &SearchRequest) -> Result<SearchResponse, SearchError> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(request)
            .send()
            .map_err(SearchError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Status(status));
        }

        let body = response.text().map_err(SearchError::Transport)?;
        serde_json::from_str(&body).map_err(SearchError::Malformed)
    }
}

#[derive(Debug)]
pub enum SearchCommand {
    Submit { id: u64, request: SearchRequest },
    Shutdown,
}

#[derive(Debug)]
pub enum SearchEvent {
    Completed {
        id: u64,
        outcome: Result<SearchResponse, SearchError>,
    },
}

/// Start the transport worker. The worker performs at most one exchange at a
/// time and reports every completion, successful or not, tagged with the id
/// of the submission it answers.
pub fn spawn<C>(client: C) -> (Sender<SearchCommand>, Receiver<SearchEvent>)
where
    C: SearchClient + Send + 'static,
{
    let (command_tx, command_rx) = mpsc::channel();
    let (event_tx, event_rx) = mpsc::channel::<SearchEvent>();

    thread::spawn(move || {
        while let Ok(command) = command_rx.recv() {
            match command {
                SearchCommand::Submit { id, request } => {
                    debug!(id, query = %request.query, mode = %request.mode, "dispatching search request");
                    let outcome = client.search(&request);
                    if let Err(error) = &outcome {
                        warn!(id, %error, "search request failed");
                    }
                    if event_tx.send(SearchEvent::Completed { id, outcome }).is_err() {
                        break;
                    }
                }
                SearchCommand::Shutdown => break,
            }
        }
    });

    (command_tx, event_rx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{GENERIC_FAILURE_MESSAGE, Session, SessionState};
    use crate::types::{CombinationMode, DocId, Query, SearchHit};

    struct StubClient {
        fail: bool,
    }

    impl SearchClient for StubClient {
        fn search(&self, _request: &SearchRequest) -> Result<SearchResponse, SearchError> {
            if self.fail {
                Err(SearchError::Status(StatusCode::INTERNAL_SERVER_ERROR))
            } else {
                Ok(SearchResponse {
                    results: vec![SearchHit {
                        doc_id: DocId::Number(7),
                        score: 0.42,
                        snippet: "the cat sat".to_string(),
                    }],
                    processing_time: 0.12345,
                })
            }
        }
    }

    fn pump(session: &mut Session, events: &Receiver<SearchEvent>) {
        let SearchEvent::Completed { id, outcome } =
            events.recv_timeout(Duration::from_secs(5)).unwrap();
        session.complete(id, outcome);
    }

    #[test]
    fn request_body_matches_backend_contract() {
        let query = Query::new("machine learning", CombinationMode::Conjunctive);
        let request = SearchRequest::from(&query);
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"query":"machine learning","mode":"1"}"#
        );
    }

    #[test]
    fn worker_round_trip_drives_session_to_success() {
        let (commands, events) = spawn(StubClient { fail: false });
        let mut session = Session::new(Query::new("the cat", CombinationMode::Conjunctive));

        let (id, request) = session.begin_submit().unwrap();
        commands.send(SearchCommand::Submit { id, request }).unwrap();
        pump(&mut session, &events);

        assert!(matches!(session.state(), SessionState::Success { .. }));
        assert_eq!(session.processing_time_display().as_deref(), Some("0.1235"));
        assert_eq!(session.hits()[0].doc_id, DocId::Number(7));

        // The stored token set highlights subsequent snippets.
        let spans = crate::highlight::highlight("the cat sat", session.tokens());
        assert!(spans.iter().any(|span| span.is_match && span.text == "cat"));

        commands.send(SearchCommand::Shutdown).unwrap();
    }

    #[test]
    fn worker_failure_surfaces_generic_message_and_keeps_hits() {
        let (commands, events) = spawn(StubClient { fail: false });
        let mut session = Session::new(Query::new("the cat", CombinationMode::Conjunctive));

        let (id, request) = session.begin_submit().unwrap();
        commands.send(SearchCommand::Submit { id, request }).unwrap();
        pump(&mut session, &events);
        drop(commands);

        let (failing, fail_events) = spawn(StubClient { fail: true });
        let (id, request) = session.begin_submit().unwrap();
        failing.send(SearchCommand::Submit { id, request }).unwrap();
        pump(&mut session, &fail_events);

        assert_eq!(session.error_message(), Some(GENERIC_FAILURE_MESSAGE));
        assert_eq!(session.hits().len(), 1);

        failing.send(SearchCommand::Shutdown).unwrap();
    }
}
