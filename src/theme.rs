//! Color themes for the terminal interface.

use ratatui::style::{Color, Modifier, Style};

/// Styles used across the interface. Fields are plain ratatui [`Style`]s so
/// a theme is a compile-time constant.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub prompt: Style,
    pub header: Style,
    pub row_highlight: Style,
    pub highlight: Style,
    pub status: Style,
    pub error: Style,
    pub empty: Style,
}

impl Theme {
    #[must_use]
    pub fn prompt_style(&self) -> Style {
        self.prompt
    }

    #[must_use]
    pub fn header_style(&self) -> Style {
        self.header
    }

    #[must_use]
    pub fn row_highlight_style(&self) -> Style {
        self.row_highlight
    }

    /// Style applied to matched query terms inside snippets.
    #[must_use]
    pub fn highlight_style(&self) -> Style {
        self.highlight
    }

    #[must_use]
    pub fn status_style(&self) -> Style {
        self.status
    }

    #[must_use]
    pub fn error_style(&self) -> Style {
        self.error
    }

    #[must_use]
    pub fn empty_style(&self) -> Style {
        self.empty
    }
}

pub const SLATE: Theme = Theme {
    prompt: Style::new().fg(Color::LightCyan),
    header: Style::new()
        .fg(Color::Rgb(226, 232, 240))
        .bg(Color::Rgb(15, 23, 42)),
    row_highlight: Style::new()
        .bg(Color::Rgb(30, 41, 59))
        .fg(Color::Rgb(250, 204, 21)),
    highlight: Style::new()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD),
    status: Style::new().fg(Color::Gray),
    error: Style::new()
        .fg(Color::LightRed)
        .add_modifier(Modifier::BOLD),
    empty: Style::new().fg(Color::DarkGray),
};

pub const LIGHT: Theme = Theme {
    prompt: Style::new().fg(Color::Blue),
    header: Style::new()
        .fg(Color::Rgb(30, 41, 59))
        .bg(Color::Rgb(226, 232, 240)),
    row_highlight: Style::new()
        .bg(Color::Rgb(203, 213, 225))
        .fg(Color::Rgb(120, 53, 15)),
    highlight: Style::new()
        .fg(Color::Rgb(180, 83, 9))
        .add_modifier(Modifier::BOLD),
    status: Style::new().fg(Color::DarkGray),
    error: Style::new().fg(Color::Red).add_modifier(Modifier::BOLD),
    empty: Style::new().fg(Color::Gray),
};

impl Default for Theme {
    fn default() -> Self {
        SLATE
    }
}

/// Names of the built-in themes, in presentation order.
#[must_use]
pub fn names() -> &'static [&'static str] {
    &["slate", "light"]
}

/// Look up a built-in theme by name.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
    match name {
        "slate" => Some(SLATE),
        "light" => Some(LIGHT),
        _ => None,
    }
}
