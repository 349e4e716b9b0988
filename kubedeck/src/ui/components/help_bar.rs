//! Inline context-aware help bar.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::colors;

/// Draws the key hints as `key:desc │ key:desc │ ...`.
pub fn draw_help_bar(f: &mut Frame, area: Rect, hints: &[(&str, &str)]) {
    let mut spans = Vec::new();
    let separator = Span::styled(" │ ", Style::default().fg(colors::GRAY));

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(separator.clone());
        }
        spans.push(Span::styled(
            *key,
            Style::default()
                .fg(colors::WARNING)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(":{}", desc),
            Style::default().fg(colors::GRAY),
        ));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Hints for the table in normal mode.
pub fn table_hints() -> Vec<(&'static str, &'static str)> {
    vec![
        ("j/k", "row"),
        ("h/l", "page"),
        ("Tab", "column"),
        ("s", "sort"),
        ("/", "search"),
        ("Space", "select"),
        ("a", "select page"),
        ("c", "columns"),
        ("r", "refresh"),
        ("Enter", "actions"),
        ("n", "namespace"),
        ("q", "quit"),
    ]
}

/// Hints while the search box is focused.
pub fn search_hints() -> Vec<(&'static str, &'static str)> {
    vec![("type", "filter"), ("Enter/Esc", "done")]
}

/// Hints for the column selector overlay.
pub fn selector_hints() -> Vec<(&'static str, &'static str)> {
    vec![
        ("j/k", "move"),
        ("Space", "show/hide"),
        ("Enter", "grab/drop"),
        ("Esc", "close"),
    ]
}

/// Hints for the row actions menu.
pub fn actions_hints() -> Vec<(&'static str, &'static str)> {
    vec![("j/k", "move"), ("Enter", "run"), ("Esc", "close")]
}
