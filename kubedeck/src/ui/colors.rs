//! Console color palette.
//!
//! Semantic colors for statuses and chrome; every component draws from these
//! constants so the theme stays consistent across views.

use ratatui::style::{Color, Modifier, Style};

use crate::table::CellTone;

pub const SUCCESS: Color = Color::Rgb(0x4E, 0xC9, 0xB0); // #4EC9B0 - teal
pub const WARNING: Color = Color::Rgb(0xD1, 0x9A, 0x66); // #D19A66 - orange
pub const ERROR: Color = Color::Rgb(0xD1, 0x69, 0x69); // #D16969 - red
pub const HEADER: Color = Color::Rgb(0x56, 0x9C, 0xD6); // #569CD6 - blue
pub const ACCENT: Color = Color::Rgb(0xC5, 0x86, 0xC0); // #C586C0 - purple
pub const GRAY: Color = Color::Rgb(0x8A, 0x8A, 0x8A); // #8A8A8A - muted text
pub const GRAY_BG: Color = Color::Rgb(0x3E, 0x44, 0x51); // #3E4451 - cursor row

/// Style for a cell tone.
pub fn tone_style(tone: CellTone) -> Style {
    match tone {
        CellTone::Default => Style::default(),
        CellTone::Muted => Style::default().fg(GRAY),
        CellTone::Strong => Style::default().add_modifier(Modifier::BOLD),
        CellTone::Success => Style::default().fg(SUCCESS),
        CellTone::Warning => Style::default().fg(WARNING),
        CellTone::Error => Style::default().fg(ERROR),
    }
}
