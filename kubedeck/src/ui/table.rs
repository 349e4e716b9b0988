//! The data-table view: one instance per resource page.
//!
//! Owns all interactive table state and derives the rendered rows through
//! the fixed filter → sort → paginate pipeline on every pass, so no stale
//! intermediate state is ever drawn.

use chrono::Utc;
use crossterm::event::{Event, KeyCode, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::{
    filter::filter_rows,
    resources::Resource,
    sort::sort_rows,
    table::{
        array_move, page_window, Column, Gesture, GestureEffect, GestureSession, HeaderSelection,
        RowAction, TableCell,
    },
    ui::{
        colors,
        components::{
            actions_menu::{self, ActionsMenuState, MenuOutcome},
            column_selector::{self, ColumnSelectorState, SelectorEntry, SelectorLayout},
            help_bar,
        },
        layout::compute_column_widths,
    },
    utils::{AccessorMode, SortValue},
};

/// Width of the leading selection-checkbox column.
const SELECT_COL_WIDTH: u16 = 4;
/// Width of the trailing actions column.
const ACTIONS_COL_WIDTH: u16 = 3;

#[derive(Debug)]
enum Mode {
    Normal,
    Search,
    Columns(ColumnSelectorState),
    Actions(ActionsMenuState),
}

/// Hit-test data from the last draw.
#[derive(Debug, Clone, Default)]
struct RenderLayout {
    header_y: u16,
    body_y: u16,
    rows_on_page: usize,
    select_x: u16,
    first_col_x: u16,
    spans: Vec<ColumnSpan>,
    actions_x: Option<u16>,
    prev_btn: Rect,
    next_btn: Rect,
    page_btns: Vec<(usize, Rect)>,
}

#[derive(Debug, Clone)]
struct ColumnSpan {
    key: String,
    x: u16,
    width: u16,
}

pub struct TableView<K: Resource> {
    resource: K,
    columns: Vec<Column<K::Row>>,
    actions: Vec<RowAction<K::Row>>,
    pub state: crate::table::TableState,
    data: Vec<K::Row>,
    mode: Mode,
    gestures: GestureSession,
    layout: Option<RenderLayout>,
    selector_layout: SelectorLayout,
}

impl<K: Resource> TableView<K> {
    pub fn new(resource: K) -> Self {
        let columns = resource.columns();
        let actions = resource.row_actions();
        let state = crate::table::TableState::new(
            columns.iter().map(|c| (c.key, c.default_hidden)),
            resource.page_size(),
        );
        let data = resource.load(Utc::now());

        Self {
            resource,
            columns,
            actions,
            state,
            data,
            mode: Mode::Normal,
            gestures: GestureSession::default(),
            layout: None,
            selector_layout: SelectorLayout::default(),
        }
    }

    pub fn row_count(&self) -> usize {
        self.data.len()
    }

    // ── derived views ────────────────────────────────────────────────────

    /// Filter → sort, in that order, always.
    fn derived_view(&self) -> Vec<&K::Row> {
        let filter = self.resource.field_accessor(AccessorMode::Filter);
        let mut view: Vec<&K::Row> = filter_rows(
            &self.data,
            &self.state.search,
            self.resource.search_key(),
            |row, field| filter(row, field),
        );

        if let Some(key) = &self.state.sort_by {
            let sort = self.resource.field_accessor(AccessorMode::Sort);
            sort_rows(&mut view, key, self.state.sort_order, |row: &&K::Row, field| {
                sort(row, field)
            });
        }

        view
    }

    fn page_slice<'a>(&self, view: &'a [&K::Row]) -> &'a [&'a K::Row] {
        let (start, end) = self.state.page_bounds(view.len());
        &view[start..end]
    }

    fn page_len(&self) -> usize {
        let view = self.derived_view();
        self.page_slice(&view).len()
    }

    fn page_ids(&self) -> Vec<String> {
        let view = self.derived_view();
        self.page_slice(&view)
            .iter()
            .map(|row| self.resource.row_id(row))
            .collect()
    }

    fn total_pages(&self) -> usize {
        self.state.total_pages(self.derived_view().len())
    }

    fn visible_columns(&self) -> Vec<&Column<K::Row>> {
        self.state
            .visible_keys()
            .into_iter()
            .filter_map(|key| self.columns.iter().find(|c| c.key == key))
            .collect()
    }

    fn render_cell(&self, row: &K::Row, column: &Column<K::Row>) -> TableCell {
        if let Some(render) = column.render {
            return render(row);
        }
        let display = self.resource.field_accessor(AccessorMode::Display);
        match display(row, column.key) {
            Some(SortValue::Text(text)) => TableCell::plain(text),
            Some(SortValue::Number(n)) => TableCell::plain(n.to_string()),
            None => TableCell::plain(""),
        }
    }

    /// The refresh delegation point: re-reads the data source without
    /// touching search, sort, selection or page.
    fn refresh(&mut self) {
        self.data = self.resource.load(Utc::now());
        let page_len = self.page_len();
        self.state.clamp_cursor(page_len);
        tracing::info!(kind = self.resource.title(), rows = self.data.len(), "refreshed");
    }

    fn apply_effect(&mut self, effect: GestureEffect) {
        match effect {
            GestureEffect::SetWidth { key, width } => self.state.set_width(&key, width),
            GestureEffect::Reorder { from, to } => {
                let mut order = self.state.column_order().to_vec();
                array_move(&mut order, from, to);
                self.state.set_column_order(order);
            }
        }
    }

    // ── events ───────────────────────────────────────────────────────────

    pub fn on_event(&mut self, ev: &Event) -> bool {
        match ev {
            Event::Key(key) => self.on_key(key.code),
            Event::Mouse(mouse) => self.on_mouse(mouse),
            // Losing the terminal abandons any in-flight gesture; nothing
            // may leak into the next interaction.
            Event::FocusLost => {
                self.gestures.abandon();
                false
            }
            _ => false,
        }
    }

    fn on_key(&mut self, code: KeyCode) -> bool {
        match &self.mode {
            Mode::Search => self.on_search_key(code),
            Mode::Columns(_) => self.on_selector_key(code),
            Mode::Actions(_) => self.on_actions_key(code),
            Mode::Normal => self.on_normal_key(code),
        }
    }

    fn on_search_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Esc | KeyCode::Enter => {
                self.mode = Mode::Normal;
                true
            }
            KeyCode::Backspace => {
                self.state.pop_search_char();
                true
            }
            KeyCode::Char(c) => {
                self.state.push_search_char(c);
                true
            }
            _ => false,
        }
    }

    fn on_selector_key(&mut self, code: KeyCode) -> bool {
        let order: Vec<String> = self.state.column_order().to_vec();
        let outcome = match &mut self.mode {
            Mode::Columns(selector) => {
                column_selector::handle_key(selector, &mut self.gestures, &order, code)
            }
            _ => return false,
        };

        match outcome {
            column_selector::SelectorOutcome::Close => self.mode = Mode::Normal,
            column_selector::SelectorOutcome::Toggle(key) => {
                self.state.toggle_column(&key);
                self.state.clamp_focused_col();
            }
            column_selector::SelectorOutcome::OrderChange(new_order) => {
                self.state.set_column_order(new_order);
            }
            column_selector::SelectorOutcome::None => {}
        }
        true
    }

    fn on_actions_key(&mut self, code: KeyCode) -> bool {
        let count = self.actions.len();
        let outcome = match &mut self.mode {
            Mode::Actions(menu) => actions_menu::handle_key(menu, count, code),
            _ => return false,
        };

        match outcome {
            MenuOutcome::Close => self.mode = Mode::Normal,
            MenuOutcome::Invoke(index) => {
                {
                    let view = self.derived_view();
                    if let Some(row) = self.page_slice(&view).get(self.state.cursor) {
                        if let Some(action) = self.actions.get(index) {
                            (action.on_click)(row);
                        }
                    }
                }
                self.mode = Mode::Normal;
            }
            MenuOutcome::None => {}
        }
        true
    }

    fn on_normal_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('/') => {
                self.mode = Mode::Search;
                true
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let len = self.page_len();
                self.state.move_cursor(1, len);
                true
            }
            KeyCode::Up | KeyCode::Char('k') => {
                let len = self.page_len();
                self.state.move_cursor(-1, len);
                true
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.state.prev_page();
                true
            }
            KeyCode::Right | KeyCode::Char('l') => {
                let total = self.total_pages();
                self.state.next_page(total);
                true
            }
            KeyCode::Tab => {
                self.state.move_focused_col(1);
                true
            }
            KeyCode::BackTab => {
                self.state.move_focused_col(-1);
                true
            }
            KeyCode::Char('s') => {
                let key = self
                    .state
                    .visible_keys()
                    .get(self.state.focused_col)
                    .map(|k| k.to_string());
                if let Some(key) = key {
                    let sortable = self
                        .columns
                        .iter()
                        .any(|c| c.key == key && c.sortable);
                    if sortable {
                        self.state.toggle_sort(&key);
                    }
                }
                true
            }
            KeyCode::Char(' ') => {
                let id = {
                    let view = self.derived_view();
                    self.page_slice(&view)
                        .get(self.state.cursor)
                        .map(|row| self.resource.row_id(row))
                };
                if let Some(id) = id {
                    self.state.toggle_row(&id);
                }
                true
            }
            KeyCode::Char('a') => {
                let ids = self.page_ids();
                self.state.toggle_page_selection(&ids);
                true
            }
            KeyCode::Char('c') => {
                self.mode = Mode::Columns(ColumnSelectorState::default());
                true
            }
            KeyCode::Char('r') => {
                self.refresh();
                true
            }
            KeyCode::Enter => {
                if self.actions.is_empty() {
                    false
                } else {
                    self.mode = Mode::Actions(ActionsMenuState::default());
                    true
                }
            }
            KeyCode::Esc => {
                if self.gestures.is_active() {
                    self.gestures.abandon();
                    true
                } else {
                    false
                }
            }
            _ => false,
        }
    }

    fn on_mouse(&mut self, mouse: &MouseEvent) -> bool {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.on_mouse_down(mouse.column, mouse.row),
            MouseEventKind::Drag(MouseButton::Left) => self.on_mouse_drag(mouse.column, mouse.row),
            MouseEventKind::Up(MouseButton::Left) => self.on_mouse_up(mouse.column, mouse.row),
            _ => false,
        }
    }

    fn on_mouse_down(&mut self, x: u16, y: u16) -> bool {
        if let Mode::Columns(_) = self.mode {
            let order: Vec<String> = self.state.column_order().to_vec();
            match self.selector_layout.entry_at(x, y, order.len()) {
                Some(index) => {
                    if let Mode::Columns(selector) = &mut self.mode {
                        selector.cursor = index;
                    }
                    self.gestures.begin(Gesture::DragColumn {
                        key: order[index].clone(),
                        from: index,
                        over: index,
                    });
                }
                // Clicking away from the popup dismisses it.
                None => self.mode = Mode::Normal,
            }
            return true;
        }
        if !matches!(self.mode, Mode::Normal) {
            return false;
        }

        let Some(layout) = self.layout.clone() else {
            return false;
        };

        if y == layout.header_y {
            // Resize handle: the last cell of a column's span.
            for span in &layout.spans {
                let handle = span.x + span.width.saturating_sub(1);
                if x == handle || x + 1 == handle {
                    self.gestures.begin(Gesture::ResizeColumn {
                        key: span.key.clone(),
                        origin_x: x,
                        origin_width: span.width,
                    });
                    return true;
                }
            }
            if x >= layout.select_x && x < layout.first_col_x {
                let ids = self.page_ids();
                self.state.toggle_page_selection(&ids);
                return true;
            }
            for span in &layout.spans {
                if x >= span.x && x < span.x + span.width {
                    let sortable = self
                        .columns
                        .iter()
                        .any(|c| c.key == span.key && c.sortable);
                    if sortable {
                        self.state.toggle_sort(&span.key);
                    }
                    return true;
                }
            }
            return false;
        }

        if y >= layout.body_y && (y - layout.body_y) < layout.rows_on_page as u16 {
            let index = (y - layout.body_y) as usize;
            self.state.cursor = index;
            if x >= layout.select_x && x < layout.first_col_x {
                let id = {
                    let view = self.derived_view();
                    self.page_slice(&view).get(index).map(|r| self.resource.row_id(r))
                };
                if let Some(id) = id {
                    self.state.toggle_row(&id);
                }
            } else if let Some(actions_x) = layout.actions_x {
                if x >= actions_x && !self.actions.is_empty() {
                    self.mode = Mode::Actions(ActionsMenuState::default());
                }
            }
            return true;
        }

        if contains(layout.prev_btn, x, y) {
            self.state.prev_page();
            return true;
        }
        if contains(layout.next_btn, x, y) {
            let total = self.total_pages();
            self.state.next_page(total);
            return true;
        }
        for (page, rect) in &layout.page_btns {
            if contains(*rect, x, y) {
                let total = self.total_pages();
                self.state.jump_to_page(*page, total);
                return true;
            }
        }

        false
    }

    fn on_mouse_drag(&mut self, x: u16, y: u16) -> bool {
        if !self.gestures.is_active() {
            return false;
        }
        // A resize applies its width on every move.
        if let Some(effect) = self.gestures.update_pointer(x) {
            self.apply_effect(effect);
            return true;
        }
        // Otherwise this is a column drag inside the selector overlay.
        let count = self.state.column_order().len();
        if let Some(index) = self.selector_layout.entry_at(x, y, count) {
            self.gestures.update_target(index);
            if let Mode::Columns(selector) = &mut self.mode {
                selector.cursor = index;
            }
        }
        true
    }

    fn on_mouse_up(&mut self, x: u16, y: u16) -> bool {
        if !self.gestures.is_active() {
            return false;
        }
        // A column drag released with no entry under the pointer has no drop
        // target; abandon it with state unchanged.
        if matches!(self.gestures.active(), Some(Gesture::DragColumn { .. })) {
            let count = self.state.column_order().len();
            if self.selector_layout.entry_at(x, y, count).is_none() {
                self.gestures.abandon();
                return true;
            }
        }
        if let Some(effect) = self.gestures.end() {
            self.apply_effect(effect);
        }
        true
    }

    // ── drawing ──────────────────────────────────────────────────────────

    pub fn draw(&mut self, f: &mut Frame, area: Rect) {
        let [toolbar_area, header_area, body_area, footer_area, help_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);

        self.draw_toolbar(f, toolbar_area);

        let view = self.derived_view();
        let sorted_len = view.len();
        let total_pages = self.state.total_pages(sorted_len);
        let page_rows = self.page_slice(&view);

        let visible = self.visible_columns();
        let headers: Vec<&str> = visible.iter().map(|c| c.header).collect();
        let cells: Vec<Vec<TableCell>> = page_rows
            .iter()
            .map(|row| visible.iter().map(|col| self.render_cell(row, col)).collect())
            .collect();
        let overrides: Vec<Option<u16>> = visible
            .iter()
            .map(|col| self.state.width_override(col.key))
            .collect();

        let actions_width = if self.actions.is_empty() {
            0
        } else {
            ACTIONS_COL_WIDTH
        };
        let columns_area_width = header_area
            .width
            .saturating_sub(SELECT_COL_WIDTH + actions_width);
        let widths = compute_column_widths(&headers, &cells, &overrides, columns_area_width);

        // Column spans for rendering and hit-testing.
        let mut spans = Vec::with_capacity(visible.len());
        let mut cursor_x = header_area.x + SELECT_COL_WIDTH;
        for (col, width) in visible.iter().zip(widths.iter()) {
            spans.push(ColumnSpan {
                key: col.key.to_string(),
                x: cursor_x,
                width: *width,
            });
            cursor_x += *width;
        }
        let actions_x = (!self.actions.is_empty()).then(|| {
            (header_area.x + header_area.width).saturating_sub(ACTIONS_COL_WIDTH)
        });

        let page_ids: Vec<String> = page_rows
            .iter()
            .map(|row| self.resource.row_id(row))
            .collect();
        let rows_on_page = page_rows.len();

        self.draw_table_header(f, header_area, &visible, &spans, &page_ids);
        self.draw_body(f, body_area, page_rows, &visible, &spans, actions_x);
        let (prev_btn, next_btn, page_btns) =
            self.draw_footer(f, footer_area, sorted_len, total_pages);

        let hints = match self.mode {
            Mode::Search => help_bar::search_hints(),
            Mode::Columns(_) => help_bar::selector_hints(),
            Mode::Actions(_) => help_bar::actions_hints(),
            Mode::Normal => help_bar::table_hints(),
        };
        help_bar::draw_help_bar(f, help_area, &hints);

        self.layout = Some(RenderLayout {
            header_y: header_area.y,
            body_y: body_area.y,
            rows_on_page,
            select_x: header_area.x,
            first_col_x: header_area.x + SELECT_COL_WIDTH,
            spans,
            actions_x,
            prev_btn,
            next_btn,
            page_btns,
        });

        // Overlays draw last, on top of the table.
        match &self.mode {
            Mode::Columns(selector) => {
                let entries: Vec<SelectorEntry> = self
                    .state
                    .column_order()
                    .iter()
                    .map(|key| SelectorEntry {
                        key: key.clone(),
                        header: self
                            .columns
                            .iter()
                            .find(|c| c.key == key)
                            .map(|c| c.header.to_string())
                            .unwrap_or_else(|| key.clone()),
                        visible: !self.state.is_hidden(key),
                    })
                    .collect();
                self.selector_layout =
                    column_selector::draw(f, area, selector, &self.gestures, &entries);
            }
            Mode::Actions(menu) => actions_menu::draw(f, area, menu, &self.actions),
            _ => {}
        }
    }

    fn draw_toolbar(&self, f: &mut Frame, area: Rect) {
        let searching = matches!(self.mode, Mode::Search);
        let mut spans = vec![Span::styled(
            " / ",
            Style::default().fg(if searching {
                colors::WARNING
            } else {
                colors::GRAY
            }),
        )];

        if self.state.search.is_empty() && !searching {
            spans.push(Span::styled(
                self.resource.search_placeholder(),
                Style::default().fg(colors::GRAY),
            ));
        } else {
            spans.push(Span::raw(self.state.search.clone()));
            if searching {
                spans.push(Span::styled("█", Style::default().fg(colors::WARNING)));
            }
        }

        let selected = self.state.selected_count();
        if selected > 0 {
            spans.push(Span::styled(
                format!("   {selected} selected"),
                Style::default().fg(colors::ACCENT),
            ));
        }

        f.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn draw_table_header(
        &self,
        f: &mut Frame,
        area: Rect,
        visible: &[&Column<K::Row>],
        spans: &[ColumnSpan],
        page_ids: &[String],
    ) {
        let header_style = Style::default()
            .fg(colors::HEADER)
            .add_modifier(Modifier::BOLD);

        let checkbox = match self.state.header_selection(page_ids) {
            HeaderSelection::Checked => "[x]",
            HeaderSelection::Indeterminate => "[~]",
            HeaderSelection::Unchecked => "[ ]",
        };
        f.render_widget(
            Paragraph::new(Span::styled(checkbox, header_style)),
            Rect {
                width: SELECT_COL_WIDTH.min(area.width),
                ..area
            },
        );

        for (i, (col, span)) in visible.iter().zip(spans.iter()).enumerate() {
            if span.x >= area.x + area.width {
                break;
            }
            let mut label = col.header.to_string();
            if self.state.sort_by.as_deref() == Some(col.key) {
                label.push(' ');
                label.push_str(self.state.sort_order.indicator());
            }
            let mut style = header_style;
            if i == self.state.focused_col {
                style = style.add_modifier(Modifier::UNDERLINED);
            }
            if !col.sortable {
                style = style.remove_modifier(Modifier::BOLD).fg(colors::GRAY);
            }
            let width = span.width.min((area.x + area.width).saturating_sub(span.x));
            f.render_widget(
                Paragraph::new(Span::styled(label, style)),
                Rect {
                    x: span.x,
                    y: area.y,
                    width,
                    height: 1,
                },
            );
        }
    }

    fn draw_body(
        &self,
        f: &mut Frame,
        area: Rect,
        page_rows: &[&K::Row],
        visible: &[&Column<K::Row>],
        spans: &[ColumnSpan],
        actions_x: Option<u16>,
    ) {
        if page_rows.is_empty() {
            f.render_widget(
                Paragraph::new(Span::styled(
                    self.resource.empty_message(),
                    Style::default().fg(colors::GRAY),
                ))
                .alignment(Alignment::Center),
                Rect { height: 1, ..area },
            );
            return;
        }

        for (row_idx, row) in page_rows.iter().enumerate() {
            let y = area.y + row_idx as u16;
            if y >= area.y + area.height {
                break;
            }

            let is_cursor = row_idx == self.state.cursor;
            let row_bg = if is_cursor {
                Style::default().bg(colors::GRAY_BG)
            } else {
                Style::default()
            };
            if is_cursor {
                f.render_widget(
                    Paragraph::new("").style(row_bg),
                    Rect {
                        y,
                        height: 1,
                        ..area
                    },
                );
            }

            let id = self.resource.row_id(row);
            let checkbox = if self.state.is_selected(&id) {
                Span::styled("[x]", Style::default().fg(colors::SUCCESS))
            } else {
                Span::styled("[ ]", Style::default().fg(colors::GRAY))
            };
            f.render_widget(
                Paragraph::new(checkbox).style(row_bg),
                Rect {
                    x: area.x,
                    y,
                    width: SELECT_COL_WIDTH.min(area.width),
                    height: 1,
                },
            );

            for (col, span) in visible.iter().zip(spans.iter()) {
                if span.x >= area.x + area.width {
                    break;
                }
                let cell = self.render_cell(row, col);
                let width = span.width.min((area.x + area.width).saturating_sub(span.x));
                f.render_widget(
                    Paragraph::new(Span::styled(cell.text, colors::tone_style(cell.tone)))
                        .style(row_bg),
                    Rect {
                        x: span.x,
                        y,
                        width: width.saturating_sub(1),
                        height: 1,
                    },
                );
            }

            if let Some(x) = actions_x {
                f.render_widget(
                    Paragraph::new(Span::styled("⋯", Style::default().fg(colors::GRAY)))
                        .style(row_bg),
                    Rect {
                        x,
                        y,
                        width: ACTIONS_COL_WIDTH.min(area.width),
                        height: 1,
                    },
                );
            }
        }
    }

    /// Draws the range text and pagination buttons; returns their rects for
    /// hit-testing.
    fn draw_footer(
        &self,
        f: &mut Frame,
        area: Rect,
        sorted_len: usize,
        total_pages: usize,
    ) -> (Rect, Rect, Vec<(usize, Rect)>) {
        let (start, end) = self.state.page_bounds(sorted_len);
        let range_text = if sorted_len == 0 {
            " 0 of 0".to_string()
        } else {
            format!(" {}–{} of {}", start + 1, end, sorted_len)
        };

        let window = page_window(self.state.page, total_pages);
        let buttons_width: u16 =
            4 + 4 + window.iter().map(|p| p.to_string().len() as u16 + 3).sum::<u16>();
        let [range_area, buttons_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(buttons_width)])
                .areas(area);

        f.render_widget(
            Paragraph::new(Span::styled(range_text, Style::default().fg(colors::GRAY))),
            range_area,
        );

        let mut x = buttons_area.x;
        let y = buttons_area.y;

        let at_first = self.state.page == 0;
        let prev_btn = Rect::new(x, y, 4, 1);
        f.render_widget(
            Paragraph::new(Span::styled(
                " ‹ ",
                Style::default().fg(if at_first { colors::GRAY } else { colors::HEADER }),
            )),
            prev_btn,
        );
        x += 4;

        let mut page_btns = Vec::with_capacity(window.len());
        for page in window {
            let label = format!(" {} ", page + 1);
            let width = label.len() as u16;
            let rect = Rect::new(x, y, width, 1);
            let style = if page == self.state.page {
                Style::default()
                    .fg(colors::HEADER)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default().fg(colors::GRAY)
            };
            f.render_widget(Paragraph::new(Span::styled(label, style)), rect);
            page_btns.push((page, rect));
            x += width;
        }

        let at_last = total_pages == 0 || self.state.page + 1 >= total_pages;
        let next_btn = Rect::new(x, y, 4, 1);
        f.render_widget(
            Paragraph::new(Span::styled(
                " › ",
                Style::default().fg(if at_last { colors::GRAY } else { colors::HEADER }),
            )),
            next_btn,
        );

        (prev_btn, next_btn, page_btns)
    }
}

fn contains(rect: Rect, x: u16, y: u16) -> bool {
    x >= rect.x && x < rect.x + rect.width && y >= rect.y && y < rect.y + rect.height
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::pod::PodResource;

    fn view() -> TableView<PodResource> {
        TableView::new(PodResource)
    }

    fn key(view: &mut TableView<PodResource>, code: KeyCode) {
        view.on_key(code);
    }

    #[test]
    fn test_search_narrows_and_resets_page() {
        let mut t = view();
        t.state.page = 1;

        key(&mut t, KeyCode::Char('/'));
        for c in "redis".chars() {
            key(&mut t, KeyCode::Char(c));
        }
        key(&mut t, KeyCode::Enter);

        assert_eq!(t.state.page, 0);
        let rows = t.derived_view();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "redis-cache-0");
    }

    #[test]
    fn test_sort_via_focused_column() {
        let mut t = view();
        // Column 0 is "name", sortable.
        key(&mut t, KeyCode::Char('s'));
        assert_eq!(t.state.sort_by.as_deref(), Some("name"));

        let mut names: Vec<String> = {
            let rows = t.derived_view();
            rows.iter().map(|r| r.name.clone()).collect()
        };
        let mut sorted = names.clone();
        sorted.sort_by_key(|n| n.to_lowercase());
        assert_eq!(names, sorted);

        // Second press flips to descending.
        key(&mut t, KeyCode::Char('s'));
        names = {
            let rows = t.derived_view();
            rows.iter().map(|r| r.name.clone()).collect()
        };
        sorted.reverse();
        assert_eq!(names, sorted);
    }

    #[test]
    fn test_unsortable_column_ignores_sort_key() {
        let mut t = view();
        // "ready" (index 3 in the default order) is not sortable.
        key(&mut t, KeyCode::Tab);
        key(&mut t, KeyCode::Tab);
        key(&mut t, KeyCode::Tab);
        key(&mut t, KeyCode::Char('s'));
        assert_eq!(t.state.sort_by, None);
    }

    #[test]
    fn test_selection_keys() {
        let mut t = view();
        key(&mut t, KeyCode::Char(' '));
        assert_eq!(t.state.selected_count(), 1);
        assert!(t
            .state
            .is_selected("production/nginx-deployment-7fb96c846b-4xmpl"));

        key(&mut t, KeyCode::Char(' '));
        assert_eq!(t.state.selected_count(), 0);

        key(&mut t, KeyCode::Char('a'));
        assert_eq!(t.state.selected_count(), t.page_len());
        key(&mut t, KeyCode::Char('a'));
        assert_eq!(t.state.selected_count(), 0);
    }

    #[test]
    fn test_selection_survives_resort() {
        let mut t = view();
        key(&mut t, KeyCode::Char(' '));
        let selected_before: Vec<String> = t
            .page_ids()
            .into_iter()
            .filter(|id| t.state.is_selected(id))
            .collect();

        key(&mut t, KeyCode::Char('s'));
        key(&mut t, KeyCode::Char('s'));

        // Identity-keyed selection: the same pod is selected regardless of
        // where sorting moved it.
        assert_eq!(t.state.selected_count(), 1);
        for id in selected_before {
            assert!(t.state.is_selected(&id));
        }
    }

    #[test]
    fn test_refresh_preserves_state() {
        let mut t = view();
        key(&mut t, KeyCode::Char('/'));
        key(&mut t, KeyCode::Char('a'));
        key(&mut t, KeyCode::Esc);
        key(&mut t, KeyCode::Char('s'));
        key(&mut t, KeyCode::Char(' '));

        let search = t.state.search.clone();
        let sort_by = t.state.sort_by.clone();
        let selected = t.state.selected_count();

        key(&mut t, KeyCode::Char('r'));

        assert_eq!(t.state.search, search);
        assert_eq!(t.state.sort_by, sort_by);
        assert_eq!(t.state.selected_count(), selected);
    }

    #[test]
    fn test_filter_sort_paginate_order() {
        let mut t = view();
        // Pods sample has 15 rows; page size 20 keeps them on one page.
        assert_eq!(t.page_len(), 15);

        key(&mut t, KeyCode::Char('/'));
        for c in "app".chars() {
            key(&mut t, KeyCode::Char(c));
        }
        key(&mut t, KeyCode::Enter);

        // Filter runs before sort and pagination.
        let rows = t.derived_view();
        assert!(rows.iter().all(|r| r.name.to_lowercase().contains("app")));
        assert_eq!(t.total_pages(), 1);
    }

    #[test]
    fn test_column_selector_round_trip() {
        let mut t = view();
        key(&mut t, KeyCode::Char('c'));

        // Hide the first column ("name").
        key(&mut t, KeyCode::Char(' '));
        assert!(t.state.is_hidden("name"));

        // Grab it, move it down one, drop it.
        key(&mut t, KeyCode::Enter);
        key(&mut t, KeyCode::Char('j'));
        key(&mut t, KeyCode::Enter);
        assert_eq!(t.state.column_order()[0], "namespace");
        assert_eq!(t.state.column_order()[1], "name");

        key(&mut t, KeyCode::Esc);
        // Hidden column is excluded from the rendered set but kept in the
        // order.
        assert!(!t.state.visible_keys().contains(&"name"));
    }
}
