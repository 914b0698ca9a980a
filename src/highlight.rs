//! Pure snippet highlighting against the submitted query's token set.
//!
//! The output is a sequence of typed spans rather than marked-up text, so no
//! markup ever crosses the core boundary; the rendering layer decides how a
//! match looks.

use regex::RegexBuilder;

/// A run of snippet text, flagged when it is a whole-word match for one of
/// the query tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnippetSpan {
    pub text: String,
    pub is_match: bool,
}

impl SnippetSpan {
    fn matched(text: &str) -> Self {
        Self {
            text: text.to_string(),
            is_match: true,
        }
    }

    fn plain(text: &str) -> Self {
        Self {
            text: text.to_string(),
            is_match: false,
        }
    }
}

/// Split `snippet` into spans, marking every case-insensitive whole-word
/// occurrence of a token. Tokens only match complete words: `cat` never
/// marks the `cat` inside `category`.
///
/// With an empty token set the snippet comes back unchanged as a single
/// unmatched span. The function is deterministic: the same snippet and
/// token set always produce identical spans.
#[must_use]
pub fn highlight(snippet: &str, tokens: &[String]) -> Vec<SnippetSpan> {
    if tokens.is_empty() {
        return vec![SnippetSpan::plain(snippet)];
    }

    let escaped: Vec<String> = tokens.iter().map(|token| regex::escape(token)).collect();
    let pattern = format!(r"\b({})\b", escaped.join("|"));
    let Ok(matcher) = RegexBuilder::new(&pattern).case_insensitive(true).build() else {
        // Escaped tokens always form a valid pattern; bail to the identity
        // rendering rather than dropping the snippet if that ever changes.
        return vec![SnippetSpan::plain(snippet)];
    };

    let mut spans = Vec::new();
    let mut cursor = 0;
    for found in matcher.find_iter(snippet) {
        if found.start() > cursor {
            spans.push(SnippetSpan::plain(&snippet[cursor..found.start()]));
        }
        spans.push(SnippetSpan::matched(found.as_str()));
        cursor = found.end();
    }
    if cursor < snippet.len() || spans.is_empty() {
        spans.push(SnippetSpan::plain(&snippet[cursor..]));
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn rendered(spans: &[SnippetSpan]) -> String {
        spans.iter().map(|span| span.text.as_str()).collect()
    }

    fn matches(spans: &[SnippetSpan]) -> Vec<&str> {
        spans
            .iter()
            .filter(|span| span.is_match)
            .map(|span| span.text.as_str())
            .collect()
    }

    #[test]
    fn empty_token_set_is_identity() {
        let spans = highlight("the cat sat", &[]);
        assert_eq!(spans, vec![SnippetSpan::plain("the cat sat")]);
    }

    #[test]
    fn marks_standalone_words_only() {
        let spans = highlight("cat in the category", &tokens(&["cat"]));
        assert_eq!(rendered(&spans), "cat in the category");
        assert_eq!(matches(&spans), vec!["cat"]);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let spans = highlight("Data, data and DATA", &tokens(&["data"]));
        assert_eq!(matches(&spans), vec!["Data", "data", "DATA"]);
    }

    #[test]
    fn multiple_tokens_share_one_pass() {
        let spans = highlight("the cat sat on the mat", &tokens(&["cat", "mat"]));
        assert_eq!(rendered(&spans), "the cat sat on the mat");
        assert_eq!(matches(&spans), vec!["cat", "mat"]);
    }

    #[test]
    fn regex_metacharacters_in_tokens_are_inert() {
        // An unescaped "u.s" would also match "uns".
        let spans = highlight("the uns and the u.s", &tokens(&["u.s"]));
        assert_eq!(matches(&spans), Vec::<&str>::new());
    }

    #[test]
    fn empty_snippet_yields_single_plain_span() {
        let spans = highlight("", &tokens(&["cat"]));
        assert_eq!(spans, vec![SnippetSpan::plain("")]);
    }

    #[test]
    fn spans_concatenate_back_to_the_snippet() {
        let snippet = "a cat, a hat and a categorical cat";
        let spans = highlight(snippet, &tokens(&["cat", "hat"]));
        assert_eq!(rendered(&spans), snippet);
        assert_eq!(matches(&spans), vec!["cat", "hat", "cat"]);
    }

    #[test]
    fn repeated_calls_are_referentially_transparent() {
        let snippet = "the cat sat";
        let set = tokens(&["cat"]);
        let first = highlight(snippet, &set);
        let second = highlight(snippet, &set);
        assert_eq!(first, second);
    }
}
