//! Application shell.
//!
//! Owns the title context (it is the provider), the active page view, and
//! the page switcher. Global keys are handled here after the active view has
//! had its chance — so typing `q` into the search box stays text, while `q`
//! anywhere else quits.

use crossterm::event::{Event, KeyCode, KeyModifiers};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    Frame,
};

use crate::{
    context::TitleContext,
    errors::Result,
    resources::{ResourceKind, ALL_KINDS},
    ui::{
        colors,
        components::{
            draw_header,
            namespace_selector::{self, NamespaceSelectorState, SelectorOutcome},
        },
        views::{make_view, View},
    },
};

pub struct App {
    pub running: bool,
    context: TitleContext,
    kind: ResourceKind,
    view: Box<dyn View>,
    namespace_overlay: Option<NamespaceSelectorState>,
}

impl App {
    pub fn new(initial: ResourceKind) -> Result<Self> {
        let mut context = TitleContext::new();
        context.mount();

        let mut view = make_view(initial);
        view.on_mount(&mut context)?;

        Ok(Self {
            running: true,
            context,
            kind: initial,
            view,
            namespace_overlay: None,
        })
    }

    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    fn switch_to(&mut self, kind: ResourceKind) -> Result<()> {
        if kind == self.kind {
            return Ok(());
        }
        tracing::info!(from = self.kind.label(), to = kind.label(), "switching page");
        self.view.on_unmount(&mut self.context)?;
        self.kind = kind;
        self.view = make_view(kind);
        self.view.on_mount(&mut self.context)
    }

    /// Routes one input event. Returns `true` when a redraw is needed.
    pub fn on_event(&mut self, ev: &Event) -> Result<bool> {
        // The namespace overlay is modal while open.
        if let Some(overlay) = &mut self.namespace_overlay {
            if let Event::Key(key) = ev {
                match namespace_selector::handle_key(overlay, key.code) {
                    SelectorOutcome::Close => self.namespace_overlay = None,
                    SelectorOutcome::Select(ns) => {
                        self.context.set_namespace(ns)?;
                        self.namespace_overlay = None;
                    }
                    SelectorOutcome::None => {}
                }
                return Ok(true);
            }
            return Ok(false);
        }

        if self.view.on_event(ev) {
            return Ok(true);
        }

        if let Event::Key(key) = ev {
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                self.running = false;
                return Ok(true);
            }
            match key.code {
                KeyCode::Char('q') => {
                    self.running = false;
                    return Ok(true);
                }
                KeyCode::Char('n') => {
                    let current = self.context.read()?.namespace.clone();
                    self.namespace_overlay = Some(NamespaceSelectorState::at(&current));
                    return Ok(true);
                }
                KeyCode::Char(c) if c.is_ascii_digit() => {
                    // 1..9 address the first nine pages, 0 the tenth.
                    if let Some(digit) = c.to_digit(10) {
                        let index = match digit {
                            0 => 9,
                            n => n as usize - 1,
                        };
                        if let Some(kind) = ALL_KINDS.get(index) {
                            self.switch_to(*kind)?;
                            return Ok(true);
                        }
                    }
                }
                _ => {}
            }
        }

        Ok(false)
    }

    pub fn draw(&mut self, f: &mut Frame, area: Rect) -> Result<()> {
        let [header_area, tabs_area, body_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .areas(area);

        // Reading the context outside the provider is a wiring bug and
        // fails the render pass loudly.
        let state = self.context.read()?.clone();
        draw_header(f, header_area, &state);
        self.draw_tabs(f, tabs_area);

        self.view.draw(f, body_area);

        if let Some(overlay) = &self.namespace_overlay {
            namespace_selector::draw(f, area, overlay, &state.namespace);
        }
        Ok(())
    }

    fn draw_tabs(&self, f: &mut Frame, area: Rect) {
        let mut spans = vec![Span::raw(" ")];
        for (i, kind) in ALL_KINDS.iter().enumerate() {
            let digit = (i + 1) % 10;
            let style = if *kind == self.kind {
                Style::default()
                    .fg(colors::HEADER)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors::GRAY)
            };
            spans.push(Span::styled(format!("{digit}:{}", kind.label()), style));
            spans.push(Span::raw("  "));
        }
        f.render_widget(ratatui::widgets::Paragraph::new(Line::from(spans)), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_page_switch_updates_context() {
        let mut app = App::new(ResourceKind::Pods).unwrap();
        assert_eq!(app.context.read().unwrap().title, "Pods");

        app.on_event(&key(KeyCode::Char('2'))).unwrap();
        assert_eq!(app.kind(), ResourceKind::Deployments);
        assert_eq!(app.context.read().unwrap().title, "Deployments");

        // '0' addresses the tenth page.
        app.on_event(&key(KeyCode::Char('0'))).unwrap();
        assert_eq!(app.kind(), ResourceKind::HelmReleases);
        assert_eq!(app.context.read().unwrap().title, "Helm Releases");
    }

    #[test]
    fn test_namespace_overlay_writes_context() {
        let mut app = App::new(ResourceKind::Pods).unwrap();

        app.on_event(&key(KeyCode::Char('n'))).unwrap();
        assert!(app.namespace_overlay.is_some());

        app.on_event(&key(KeyCode::Char('j'))).unwrap();
        app.on_event(&key(KeyCode::Enter)).unwrap();
        assert!(app.namespace_overlay.is_none());
        assert_eq!(app.context.read().unwrap().namespace, "default");

        // Switching pages leaves the namespace alone.
        app.on_event(&key(KeyCode::Char('3'))).unwrap();
        assert_eq!(app.context.read().unwrap().namespace, "default");
    }

    #[test]
    fn test_quit_key_is_not_captured_by_search() {
        let mut app = App::new(ResourceKind::Pods).unwrap();

        // While searching, 'q' is text.
        app.on_event(&key(KeyCode::Char('/'))).unwrap();
        app.on_event(&key(KeyCode::Char('q'))).unwrap();
        assert!(app.running);

        // Out of search mode it quits.
        app.on_event(&key(KeyCode::Esc)).unwrap();
        app.on_event(&key(KeyCode::Char('q'))).unwrap();
        assert!(!app.running);
    }
}
