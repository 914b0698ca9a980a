//! Types shared across the search session and the user interface.

mod highlight;
mod query;
mod result;

pub use query::{CombinationMode, Query};
pub use result::{DocId, SearchHit, SearchResponse};

pub(crate) use highlight::snippet_cell;
