//! Input row: prompt, query editor, mode tabs, and the loading spinner.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Tabs};
use throbber_widgets_tui::{Throbber, ThrobberState};

use crate::input::SearchInput;
use crate::theme::Theme;
use crate::types::CombinationMode;

const PROMPT: &str = "Search";
// " Conjunctive " + " Disjunctive " + trailing padding so the rightmost tab
// is never cut off.
const TABS_WIDTH: u16 = 28;

/// Render the input row with the mode tabs on the right.
pub(crate) fn render_input_row(
    search_input: &SearchInput,
    mode: CombinationMode,
    loading: bool,
    throbber_state: &ThrobberState,
    frame: &mut Frame,
    area: Rect,
    theme: &Theme,
) {
    let prompt_text = format!("{PROMPT} > ");
    let constraints = vec![
        Constraint::Length(prompt_text.len() as u16),
        Constraint::Min(1),
        Constraint::Length(TABS_WIDTH),
    ];
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    let prompt_widget = Paragraph::new(prompt_text).style(theme.prompt_style());
    frame.render_widget(prompt_widget, horizontal[0]);

    let input_area = horizontal[1];
    search_input.render(frame, input_area, theme);
    if loading {
        render_spinner(frame, input_area, throbber_state, theme);
    }

    let selected = match mode {
        CombinationMode::Conjunctive => 0,
        CombinationMode::Disjunctive => 1,
    };
    let tab_titles = vec![
        Line::from(" Conjunctive "),
        Line::from(" Disjunctive "),
    ];
    let tabs = Tabs::new(tab_titles)
        .select(selected)
        .divider("")
        .style(theme.empty_style())
        .highlight_style(theme.header_style());
    frame.render_widget(tabs, horizontal[2]);
}

/// Draw the throbber at the right edge of the input area while a request is
/// outstanding.
fn render_spinner(
    frame: &mut Frame,
    area: Rect,
    throbber_state: &ThrobberState,
    theme: &Theme,
) {
    if area.width < 2 || area.height == 0 {
        return;
    }
    let muted = theme.empty_style();
    let spinner = Throbber::default().style(muted).throbber_style(muted);
    let span = spinner.to_symbol_span(throbber_state);
    let width = span.width() as u16;
    if width == 0 || width >= area.width {
        return;
    }
    let spinner_area = Rect {
        x: area.right().saturating_sub(width),
        y: area.y,
        width,
        height: 1,
    };
    frame.render_widget(Paragraph::new(Line::from(span)), spinner_area);
}
