use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Cell;

use crate::highlight::SnippetSpan;
use crate::theme::Theme;

/// Build a table cell from highlighter spans, styling the matched runs.
pub(crate) fn snippet_cell(spans: Vec<SnippetSpan>, theme: &Theme) -> Cell<'static> {
    let styled: Vec<Span<'static>> = spans
        .into_iter()
        .map(|span| {
            let style = if span.is_match {
                theme.highlight_style()
            } else {
                Style::default()
            };
            Span::styled(span.text, style)
        })
        .collect();
    Cell::from(Line::from(styled))
}
