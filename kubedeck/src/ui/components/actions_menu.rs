//! Per-row action popup.
//!
//! Lists the page's row actions for the focused row; invoking one calls the
//! action's `on_click` with that row and nothing else.

use crossterm::event::KeyCode;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, List, ListItem},
    Frame,
};

use crate::{
    table::{ActionVariant, RowAction},
    ui::colors,
};

#[derive(Debug, Default)]
pub struct ActionsMenuState {
    pub cursor: usize,
}

pub enum MenuOutcome {
    None,
    Close,
    Invoke(usize),
}

pub fn handle_key(state: &mut ActionsMenuState, action_count: usize, key: KeyCode) -> MenuOutcome {
    match key {
        KeyCode::Esc => MenuOutcome::Close,
        KeyCode::Down | KeyCode::Char('j') => {
            if state.cursor + 1 < action_count {
                state.cursor += 1;
            }
            MenuOutcome::None
        }
        KeyCode::Up | KeyCode::Char('k') => {
            state.cursor = state.cursor.saturating_sub(1);
            MenuOutcome::None
        }
        KeyCode::Enter => MenuOutcome::Invoke(state.cursor),
        _ => MenuOutcome::None,
    }
}

pub fn draw<R>(f: &mut Frame, area: Rect, state: &ActionsMenuState, actions: &[RowAction<R>]) {
    let width = actions
        .iter()
        .map(|a| a.label.len() as u16 + 4)
        .max()
        .unwrap_or(10)
        .max(14)
        .min(area.width);
    let height = (actions.len() as u16 + 2).min(area.height);
    let popup = Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    };

    let items: Vec<ListItem> = actions
        .iter()
        .enumerate()
        .map(|(i, action)| {
            let mut style = match action.variant {
                ActionVariant::Default => Style::default(),
                ActionVariant::Destructive => Style::default().fg(colors::ERROR),
            };
            if i == state.cursor {
                style = style.bg(colors::GRAY_BG).add_modifier(Modifier::BOLD);
            }
            ListItem::new(Line::styled(format!(" {}", action.label), style))
        })
        .collect();

    f.render_widget(Clear, popup);
    f.render_widget(
        List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Actions ")
                .title_style(Style::default().fg(colors::HEADER)),
        ),
        popup,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_navigation_and_invoke() {
        let mut state = ActionsMenuState::default();

        handle_key(&mut state, 3, KeyCode::Char('j'));
        handle_key(&mut state, 3, KeyCode::Char('j'));
        handle_key(&mut state, 3, KeyCode::Char('j'));
        assert_eq!(state.cursor, 2);

        assert!(matches!(
            handle_key(&mut state, 3, KeyCode::Enter),
            MenuOutcome::Invoke(2)
        ));
        assert!(matches!(
            handle_key(&mut state, 3, KeyCode::Esc),
            MenuOutcome::Close
        ));
    }
}
