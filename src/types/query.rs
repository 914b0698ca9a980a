use std::fmt;

use clap::ValueEnum;
use serde::Deserialize;

/// How the backend combines the query terms during retrieval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CombinationMode {
    /// Every term must match (AND).
    #[default]
    Conjunctive,
    /// Any term may match (OR).
    Disjunctive,
}

impl CombinationMode {
    /// Value carried in the request body. The backend expects `"1"` for
    /// conjunctive and `"2"` for disjunctive retrieval.
    #[must_use]
    pub const fn wire_value(self) -> &'static str {
        match self {
            CombinationMode::Conjunctive => "1",
            CombinationMode::Disjunctive => "2",
        }
    }

    /// Return the other mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            CombinationMode::Conjunctive => CombinationMode::Disjunctive,
            CombinationMode::Disjunctive => CombinationMode::Conjunctive,
        }
    }
}

impl fmt::Display for CombinationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CombinationMode::Conjunctive => "Conjunctive",
            CombinationMode::Disjunctive => "Disjunctive",
        };
        f.write_str(label)
    }
}

/// The user's current query: free text plus the term combination mode.
///
/// Mutable only through direct edits; a submission captures a snapshot, so
/// typing while a request is outstanding never changes what was sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub text: String,
    pub mode: CombinationMode,
}

impl Query {
    #[must_use]
    pub fn new(text: impl Into<String>, mode: CombinationMode) -> Self {
        Self {
            text: text.into(),
            mode,
        }
    }
}

impl Default for Query {
    fn default() -> Self {
        Self::new(String::new(), CombinationMode::default())
    }
}
