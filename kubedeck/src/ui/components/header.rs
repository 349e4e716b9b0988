//! Application header: the active page's title, count and description on the
//! left, the selected namespace on the right. All of it comes from the shared
//! title context — this component is a pure reader.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::{context::TitleState, ui::colors};

pub fn draw_header(f: &mut Frame, area: Rect, state: &TitleState) {
    let [title_area, namespace_area] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(24)]).areas(area);

    let mut spans = vec![Span::styled(
        " kubedeck ",
        Style::default()
            .fg(colors::HEADER)
            .add_modifier(Modifier::BOLD),
    )];

    if !state.title.is_empty() {
        spans.push(Span::styled("│ ", Style::default().fg(colors::GRAY)));
        spans.push(Span::styled(
            state.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ));
        if let Some(count) = state.count {
            spans.push(Span::styled(
                format!(" ({count})"),
                Style::default().fg(colors::GRAY),
            ));
        }
        if let Some(description) = &state.description {
            spans.push(Span::styled(" │ ", Style::default().fg(colors::GRAY)));
            spans.push(Span::styled(
                description.clone(),
                Style::default().fg(colors::GRAY),
            ));
        }
    }

    f.render_widget(Paragraph::new(Line::from(spans)), title_area);

    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("⬚ ", Style::default().fg(colors::GRAY)),
            Span::styled(state.namespace.clone(), Style::default().fg(colors::ACCENT)),
            Span::raw(" "),
        ]))
        .alignment(Alignment::Right),
        namespace_area,
    );
}
