//! Core crate exports for building and running the `sift` terminal interface.
//!
//! `sift` is an interactive client for a remote document search service: it
//! collects a query and a term combination mode, submits them to the search
//! endpoint, and renders the ranked results with the matched query terms
//! highlighted inside each snippet. The root module re-exports the session
//! controller and highlighting primitives so that embedders can drive a
//! search session without digging through the module hierarchy.

pub mod app;
pub mod app_dirs;
pub mod highlight;
pub mod input;
pub mod logging;
pub mod search;
pub mod session;
mod tabs;
mod tables;
pub mod theme;
pub mod tokenize;
pub mod types;

pub use app::{AppOptions, run};
pub use highlight::{SnippetSpan, highlight};
pub use search::{HttpClient, SearchClient, SearchError, SearchRequest};
pub use session::{GENERIC_FAILURE_MESSAGE, Session, SessionState};
pub use theme::Theme;
pub use types::{CombinationMode, DocId, Query, SearchHit, SearchResponse};
