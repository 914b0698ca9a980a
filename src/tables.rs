//! Results table: doc id, score, and the highlighted snippet per hit.

use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::widgets::{Cell, HighlightSpacing, Row, Table, TableState};

use crate::highlight::highlight;
use crate::theme::Theme;
use crate::types::{SearchHit, snippet_cell};

const HIGHLIGHT_SYMBOL: &str = "▶ ";
const TABLE_COLUMN_SPACING: u16 = 1;

/// Render the ranked hits. Snippets are split into spans by the highlighter
/// using the token set from the last successful submission.
pub(crate) fn render_results(
    frame: &mut Frame,
    area: Rect,
    table_state: &mut TableState,
    hits: &[SearchHit],
    tokens: &[String],
    theme: &Theme,
) {
    let widths = [
        Constraint::Length(10),
        Constraint::Length(10),
        Constraint::Min(20),
    ];

    let header = Row::new(vec![
        Cell::from("DocID"),
        Cell::from("Score"),
        Cell::from("Snippet"),
    ])
    .style(theme.header_style())
    .height(1)
    .bottom_margin(1);

    let rows: Vec<Row<'_>> = hits
        .iter()
        .map(|hit| {
            Row::new(vec![
                Cell::from(hit.doc_id.to_string()),
                Cell::from(hit.score.to_string()),
                snippet_cell(highlight(&hit.snippet, tokens), theme),
            ])
        })
        .collect();

    let table = Table::new(rows, widths)
        .header(header)
        .column_spacing(TABLE_COLUMN_SPACING)
        .highlight_spacing(HighlightSpacing::WhenSelected)
        .row_highlight_style(theme.row_highlight_style())
        .highlight_symbol(HIGHLIGHT_SYMBOL);
    frame.render_stateful_widget(table, area, table_state);
}
