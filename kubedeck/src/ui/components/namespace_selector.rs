//! Namespace pick overlay.
//!
//! Writes the shared context's namespace field; nothing else. The selection
//! is cosmetic by design — it is displayed in the header but not wired into
//! row filtering.

use crossterm::event::KeyCode;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, List, ListItem},
    Frame,
};

use crate::{context::NAMESPACES, ui::colors};

#[derive(Debug, Default)]
pub struct NamespaceSelectorState {
    pub cursor: usize,
}

impl NamespaceSelectorState {
    /// Opens positioned on the currently selected namespace.
    pub fn at(current: &str) -> Self {
        Self {
            cursor: NAMESPACES.iter().position(|ns| *ns == current).unwrap_or(0),
        }
    }
}

pub enum SelectorOutcome {
    None,
    Close,
    Select(&'static str),
}

pub fn handle_key(state: &mut NamespaceSelectorState, key: KeyCode) -> SelectorOutcome {
    match key {
        KeyCode::Esc => SelectorOutcome::Close,
        KeyCode::Down | KeyCode::Char('j') => {
            if state.cursor + 1 < NAMESPACES.len() {
                state.cursor += 1;
            }
            SelectorOutcome::None
        }
        KeyCode::Up | KeyCode::Char('k') => {
            state.cursor = state.cursor.saturating_sub(1);
            SelectorOutcome::None
        }
        KeyCode::Enter => SelectorOutcome::Select(NAMESPACES[state.cursor]),
        _ => SelectorOutcome::None,
    }
}

pub fn draw(f: &mut Frame, area: Rect, state: &NamespaceSelectorState, current: &str) {
    let width = 28u16.min(area.width);
    let height = (NAMESPACES.len() as u16 + 2).min(area.height);
    let popup = Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    };

    let items: Vec<ListItem> = NAMESPACES
        .iter()
        .enumerate()
        .map(|(i, ns)| {
            let marker = if *ns == current { "● " } else { "  " };
            let mut style = Style::default();
            if i == state.cursor {
                style = style.bg(colors::GRAY_BG).add_modifier(Modifier::BOLD);
            }
            ListItem::new(Line::styled(format!("{marker}{ns}"), style))
        })
        .collect();

    f.render_widget(Clear, popup);
    f.render_widget(
        List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Namespace ")
                .title_style(Style::default().fg(colors::HEADER)),
        ),
        popup,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_on_current() {
        let state = NamespaceSelectorState::at("production");
        assert_eq!(NAMESPACES[state.cursor], "production");

        // Unknown value falls back to the first entry.
        let state = NamespaceSelectorState::at("nope");
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn test_navigation_clamps() {
        let mut state = NamespaceSelectorState::default();
        assert!(matches!(
            handle_key(&mut state, KeyCode::Up),
            SelectorOutcome::None
        ));
        assert_eq!(state.cursor, 0);

        for _ in 0..20 {
            handle_key(&mut state, KeyCode::Char('j'));
        }
        assert_eq!(state.cursor, NAMESPACES.len() - 1);
    }

    #[test]
    fn test_select_and_close() {
        let mut state = NamespaceSelectorState::default();
        handle_key(&mut state, KeyCode::Char('j'));
        match handle_key(&mut state, KeyCode::Enter) {
            SelectorOutcome::Select(ns) => assert_eq!(ns, NAMESPACES[1]),
            _ => panic!("expected a selection"),
        }
        assert!(matches!(
            handle_key(&mut state, KeyCode::Esc),
            SelectorOutcome::Close
        ));
    }
}
