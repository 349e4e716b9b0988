//! Column visibility and ordering overlay.
//!
//! One entry per column (hidden ones included): a drag handle, a checkbox
//! bound to visibility, and the header label. Toggling never reorders;
//! reordering goes through a grab → move → drop gesture — by keyboard or by
//! pointer — and on drop emits the **full** new key order, computed with
//! array-move semantics.

use crossterm::event::KeyCode;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, List, ListItem},
    Frame,
};

use crate::{
    table::{array_move, Gesture, GestureEffect, GestureSession},
    ui::colors,
};

#[derive(Debug, Default)]
pub struct ColumnSelectorState {
    pub cursor: usize,
}

/// An entry in the selector: column key, header label, currently visible.
pub struct SelectorEntry {
    pub key: String,
    pub header: String,
    pub visible: bool,
}

pub enum SelectorOutcome {
    None,
    Close,
    Toggle(String),
    OrderChange(Vec<String>),
}

/// Rects of the last-drawn overlay, for pointer hit-testing.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectorLayout {
    pub popup: Rect,
    pub list_y: u16,
}

impl SelectorLayout {
    /// Maps a pointer position to an entry index.
    pub fn entry_at(&self, x: u16, y: u16, entry_count: usize) -> Option<usize> {
        if x < self.popup.x || x >= self.popup.x + self.popup.width || y < self.list_y {
            return None;
        }
        let index = (y - self.list_y) as usize;
        (index < entry_count).then_some(index)
    }
}

/// Applies a reorder effect to the full key order and returns the new one.
fn reordered(order: &[String], from: usize, to: usize) -> Vec<String> {
    let mut next: Vec<String> = order.to_vec();
    array_move(&mut next, from, to);
    next
}

pub fn handle_key(
    state: &mut ColumnSelectorState,
    session: &mut GestureSession,
    order: &[String],
    key: KeyCode,
) -> SelectorOutcome {
    let count = order.len();
    match key {
        KeyCode::Esc => {
            if session.is_active() {
                // Abandon the grab; the overlay stays open, nothing moved.
                session.abandon();
                SelectorOutcome::None
            } else {
                SelectorOutcome::Close
            }
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if state.cursor + 1 < count {
                state.cursor += 1;
                session.update_target(state.cursor);
            }
            SelectorOutcome::None
        }
        KeyCode::Up | KeyCode::Char('k') => {
            if state.cursor > 0 {
                state.cursor -= 1;
                session.update_target(state.cursor);
            }
            SelectorOutcome::None
        }
        KeyCode::Char(' ') => {
            // Checkbox toggling never changes order.
            if session.is_active() {
                return SelectorOutcome::None;
            }
            match order.get(state.cursor) {
                Some(key) => SelectorOutcome::Toggle(key.clone()),
                None => SelectorOutcome::None,
            }
        }
        KeyCode::Enter => {
            if session.is_active() {
                match session.end() {
                    Some(GestureEffect::Reorder { from, to }) => {
                        SelectorOutcome::OrderChange(reordered(order, from, to))
                    }
                    _ => SelectorOutcome::None,
                }
            } else if let Some(key) = order.get(state.cursor) {
                session.begin(Gesture::DragColumn {
                    key: key.clone(),
                    from: state.cursor,
                    over: state.cursor,
                });
                SelectorOutcome::None
            } else {
                SelectorOutcome::None
            }
        }
        _ => SelectorOutcome::None,
    }
}

pub fn draw(
    f: &mut Frame,
    area: Rect,
    state: &ColumnSelectorState,
    session: &GestureSession,
    entries: &[SelectorEntry],
) -> SelectorLayout {
    let width = entries
        .iter()
        .map(|e| e.header.len() as u16 + 10)
        .max()
        .unwrap_or(20)
        .max(24)
        .min(area.width);
    let height = (entries.len() as u16 + 2).min(area.height);
    let popup = Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    };

    let grabbed = match session.active() {
        Some(Gesture::DragColumn { from, .. }) => Some(*from),
        _ => None,
    };

    let items: Vec<ListItem> = entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let handle = if grabbed == Some(i) { "◆" } else { "≡" };
            let checkbox = if entry.visible { "[x]" } else { "[ ]" };
            let mut style = Style::default();
            if i == state.cursor {
                style = style.bg(colors::GRAY_BG).add_modifier(Modifier::BOLD);
            }
            if grabbed == Some(i) {
                style = style.fg(colors::WARNING);
            }
            ListItem::new(Line::styled(
                format!(" {handle} {checkbox} {}", entry.header),
                style,
            ))
        })
        .collect();

    f.render_widget(Clear, popup);
    f.render_widget(
        List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Columns ")
                .title_style(Style::default().fg(colors::HEADER)),
        ),
        popup,
    );

    SelectorLayout {
        popup,
        list_y: popup.y + 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order() -> Vec<String> {
        ["name", "ns", "status", "age"]
            .into_iter()
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_keyboard_reorder_emits_full_order() {
        let order = order();
        let mut state = ColumnSelectorState { cursor: 2 };
        let mut session = GestureSession::default();

        // Grab "status" at index 2, move it to the top, drop.
        handle_key(&mut state, &mut session, &order, KeyCode::Enter);
        assert!(session.is_active());
        handle_key(&mut state, &mut session, &order, KeyCode::Char('k'));
        handle_key(&mut state, &mut session, &order, KeyCode::Char('k'));

        match handle_key(&mut state, &mut session, &order, KeyCode::Enter) {
            SelectorOutcome::OrderChange(new_order) => {
                assert_eq!(new_order, vec!["status", "name", "ns", "age"]);
            }
            _ => panic!("expected an order change"),
        }
        assert!(!session.is_active());
    }

    #[test]
    fn test_drop_in_place_changes_nothing() {
        let order = order();
        let mut state = ColumnSelectorState { cursor: 1 };
        let mut session = GestureSession::default();

        handle_key(&mut state, &mut session, &order, KeyCode::Enter);
        assert!(matches!(
            handle_key(&mut state, &mut session, &order, KeyCode::Enter),
            SelectorOutcome::None
        ));
    }

    #[test]
    fn test_toggle_never_reorders() {
        let order = order();
        let mut state = ColumnSelectorState { cursor: 1 };
        let mut session = GestureSession::default();

        match handle_key(&mut state, &mut session, &order, KeyCode::Char(' ')) {
            SelectorOutcome::Toggle(key) => assert_eq!(key, "ns"),
            _ => panic!("expected a toggle"),
        }

        // While grabbed, the checkbox is inert.
        handle_key(&mut state, &mut session, &order, KeyCode::Enter);
        assert!(matches!(
            handle_key(&mut state, &mut session, &order, KeyCode::Char(' ')),
            SelectorOutcome::None
        ));
    }

    #[test]
    fn test_esc_abandons_grab_before_closing() {
        let order = order();
        let mut state = ColumnSelectorState { cursor: 0 };
        let mut session = GestureSession::default();

        handle_key(&mut state, &mut session, &order, KeyCode::Enter);
        assert!(matches!(
            handle_key(&mut state, &mut session, &order, KeyCode::Esc),
            SelectorOutcome::None
        ));
        assert!(!session.is_active());

        assert!(matches!(
            handle_key(&mut state, &mut session, &order, KeyCode::Esc),
            SelectorOutcome::Close
        ));
    }

    #[test]
    fn test_entry_hit_test() {
        let layout = SelectorLayout {
            popup: Rect::new(10, 5, 24, 6),
            list_y: 6,
        };
        assert_eq!(layout.entry_at(12, 6, 4), Some(0));
        assert_eq!(layout.entry_at(12, 9, 4), Some(3));
        assert_eq!(layout.entry_at(12, 10, 4), None);
        assert_eq!(layout.entry_at(5, 6, 4), None);
    }
}
