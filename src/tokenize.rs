//! Query text normalization for snippet highlighting.
//!
//! The token set derived here drives the highlighter, so the normalization
//! must mirror the word semantics of its match pattern: lowercase words made
//! of word characters only.

/// Split query text into lowercase, punctuation-stripped tokens.
///
/// The text is lowercased, split on runs of whitespace, and every non-word
/// character (anything other than an alphanumeric or `_`) is stripped from
/// each token. Tokens left empty by the stripping are discarded.
#[must_use]
pub fn tokenize_query(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(|word| {
            word.chars()
                .filter(|c| c.is_alphanumeric() || *c == '_')
                .collect::<String>()
        })
        .filter(|word| !word.is_empty())
        .collect()
}
