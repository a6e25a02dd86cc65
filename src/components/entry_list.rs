//! Sortable entry list
//!
//! Owns the working entry order and the column descriptors. Header
//! activation re-sorts the entries; cells are drawn through the rules in
//! [`crate::components::cell`].

use crate::action::Action;
use crate::component::Component;
use crate::components::cell::{render_cell, CellView};
use crate::model::column::{apply_sort, build_columns, ColumnDescriptor};
use crate::model::entry::Entry;
use crate::model::sort::copy_and_sort;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, HighlightSpacing, Paragraph, Row, Table, TableState},
    Frame,
};
use tracing::{debug, trace};
use unicode_width::UnicodeWidthStr;

const HIGHLIGHT_SYMBOL: &str = "▶ ";
const COLUMN_SPACING: u16 = 1;
const PAGE_SIZE: usize = 10;
/// Room kept next to each header name for the sort indicator
const INDICATOR_WIDTH: usize = 2;

/// Screen position of a header cell, recorded at draw time
#[derive(Debug, Clone)]
struct HeaderHit {
    x: u16,
    width: u16,
    key: String,
}

/// Sortable list view over AEM entries
pub struct EntryList {
    items: Vec<Entry>,
    columns: Vec<ColumnDescriptor>,
    /// Rendered cells, aligned with `items` and `columns`
    cells: Vec<Vec<CellView>>,
    table_state: TableState,
    focused_column: usize,
    header_hits: Vec<HeaderHit>,
    header_y: Option<u16>,
    rows_area: Rect,
}

impl EntryList {
    pub fn new(items: Vec<Entry>) -> Self {
        let columns = build_columns(&items);
        let selected = if items.is_empty() { None } else { Some(0) };

        let mut list = Self {
            items,
            columns,
            cells: Vec::new(),
            table_state: TableState::default().with_selected(selected),
            focused_column: 0,
            header_hits: Vec::new(),
            header_y: None,
            rows_area: Rect::default(),
        };
        list.rebuild_cells();
        list
    }

    pub fn items(&self) -> &[Entry] {
        &self.items
    }

    pub fn columns(&self) -> &[ColumnDescriptor] {
        &self.columns
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.table_state.selected()
    }

    pub fn selected_entry(&self) -> Option<&Entry> {
        self.items.get(self.table_state.selected()?)
    }

    pub fn focused_column(&self) -> Option<&ColumnDescriptor> {
        self.columns.get(self.focused_column)
    }

    /// Sort by the column with `key`.
    ///
    /// An already sorted column flips direction, any other column sorts
    /// ascending. The highlighted entry stays highlighted. Returns false if
    /// no column has that key.
    pub fn activate_column(&mut self, key: &str) -> bool {
        let Some(position) = self.columns.iter().position(|c| c.key == key) else {
            debug!("Ignoring activation of unknown column {}", key);
            return false;
        };

        let column = &self.columns[position];
        let direction = column.next_direction();
        let selected_id = self.selected_entry().map(|e| e.id.clone());

        self.items = copy_and_sort(&self.items, &column.field_name, direction);
        self.columns = apply_sort(&self.columns, key, direction);
        self.focused_column = position;
        self.rebuild_cells();

        if let Some(id) = selected_id {
            let index = self.items.iter().position(|e| e.id == id);
            self.table_state.select(index);
        }

        debug!("Sorted {} entries by {} ({:?})", self.items.len(), key, direction);
        true
    }

    /// Tooltip of the focused cell in the highlighted row
    pub fn tooltip(&self) -> Option<String> {
        let row = self.cells.get(self.table_state.selected()?)?;
        row.get(self.focused_column)?.tooltip()
    }

    fn rebuild_cells(&mut self) {
        self.cells = self
            .items
            .iter()
            .map(|entry| self.columns.iter().map(|c| render_cell(entry, c)).collect())
            .collect();
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────

    fn select(&mut self, index: usize) {
        if self.items.is_empty() {
            self.table_state.select(None);
        } else {
            self.table_state.select(Some(index.min(self.items.len() - 1)));
        }
    }

    fn move_selection(&mut self, delta: isize) {
        let current = self.table_state.selected().unwrap_or(0);
        self.select(current.saturating_add_signed(delta));
    }

    fn move_focus(&mut self, delta: isize) {
        let last = self.columns.len().saturating_sub(1);
        self.focused_column = self.focused_column.saturating_add_signed(delta).min(last);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Layout & hit testing
    // ─────────────────────────────────────────────────────────────────────────

    /// Width of each column, clamped to its bounds.
    ///
    /// Country placeholders show a full name, so a column holding one grows
    /// past its maximum until the name fits.
    fn column_widths(&self) -> Vec<u16> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, column)| {
                let mut content = 0;
                let mut unclamped = 0;
                for cell in self.cells.iter().filter_map(|row| row.get(i)) {
                    let width = cell.text().width();
                    content = content.max(width);
                    if matches!(cell, CellView::Placeholder { .. }) {
                        unclamped = unclamped.max(width);
                    }
                }
                let header = column.name.width() + INDICATOR_WIDTH;
                let width = content.max(header) as u16;
                width
                    .clamp(column.min_width, column.max_width)
                    .max(unclamped as u16)
            })
            .collect()
    }

    /// Rendered cells of the entry at `index`
    pub fn cells_at(&self, index: usize) -> Option<&[CellView]> {
        self.cells.get(index).map(Vec::as_slice)
    }

    fn record_hit_areas(&mut self, inner: Rect, constraints: &[Constraint]) {
        let selection_width = HIGHLIGHT_SYMBOL.width() as u16;
        let header_row = Rect {
            x: inner.x.saturating_add(selection_width),
            width: inner.width.saturating_sub(selection_width),
            height: 1,
            ..inner
        };

        let rects = Layout::horizontal(constraints.iter().copied())
            .flex(Flex::Start)
            .spacing(COLUMN_SPACING)
            .split(header_row);

        self.header_hits = rects
            .iter()
            .zip(&self.columns)
            .map(|(rect, column)| HeaderHit {
                x: rect.x,
                width: rect.width,
                key: column.key.clone(),
            })
            .collect();
        self.header_y = (inner.height > 0).then_some(inner.y);
        self.rows_area = Rect {
            y: inner.y.saturating_add(1),
            height: inner.height.saturating_sub(1),
            ..inner
        };
    }

    fn header_key_at(&self, x: u16, y: u16) -> Option<String> {
        if self.header_y != Some(y) {
            return None;
        }
        self.header_hits
            .iter()
            .find(|hit| x >= hit.x && x < hit.x.saturating_add(hit.width))
            .map(|hit| hit.key.clone())
    }

    fn row_at(&self, x: u16, y: u16) -> Option<usize> {
        let area = self.rows_area;
        let inside = x >= area.x
            && x < area.x.saturating_add(area.width)
            && y >= area.y
            && y < area.y.saturating_add(area.height);
        if !inside {
            return None;
        }
        let index = self.table_state.offset() + (y - area.y) as usize;
        (index < self.items.len()).then_some(index)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Rendering
    // ─────────────────────────────────────────────────────────────────────────

    fn header_row(&self) -> Row<'static> {
        let cells: Vec<Cell> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, column)| {
                let mut style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
                if i == self.focused_column {
                    style = style.add_modifier(Modifier::REVERSED);
                }
                Cell::from(Span::styled(column.header_label(), style))
            })
            .collect();
        Row::new(cells)
    }

    fn draw_tooltip(&self, frame: &mut Frame, area: Rect) {
        let line = match self.tooltip() {
            Some(tooltip) => Line::from(vec![
                Span::styled(" ⓘ ", Style::default().fg(Color::Yellow)),
                Span::styled(tooltip, Style::default().fg(Color::White)),
            ]),
            None => Line::from(Span::styled(
                " h/l focus column  s sort  Enter open",
                Style::default().fg(Color::DarkGray),
            )),
        };
        frame.render_widget(Paragraph::new(line), area);
    }
}

impl Component for EntryList {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('j') | KeyCode::Down => Some(Action::NextItem),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::PrevItem),
            KeyCode::Char('g') | KeyCode::Home => Some(Action::FirstItem),
            KeyCode::Char('G') | KeyCode::End => Some(Action::LastItem),
            KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::PageDown)
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::PageUp)
            }
            KeyCode::PageDown => Some(Action::PageDown),
            KeyCode::PageUp => Some(Action::PageUp),
            KeyCode::Char('h') | KeyCode::Left => Some(Action::PrevColumn),
            KeyCode::Char('l') | KeyCode::Right => Some(Action::NextColumn),
            KeyCode::Char('s') => self
                .focused_column()
                .map(|c| Action::ActivateColumn(c.key.clone())),
            KeyCode::F(n) => self
                .columns
                .get((n as usize).wrapping_sub(1))
                .map(|c| Action::ActivateColumn(c.key.clone())),
            KeyCode::Enter => self
                .selected_index()
                .map(|index| Action::ItemInvoked { index }),
            KeyCode::Char('i') => Some(Action::OpenEntryDetail),
            _ => None,
        };
        Ok(action)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        let action = match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(key) = self.header_key_at(mouse.column, mouse.row) {
                    Some(Action::ActivateColumn(key))
                } else {
                    // Clicking the highlighted row again opens it
                    self.row_at(mouse.column, mouse.row).map(|index| {
                        if self.selected_index() == Some(index) {
                            Action::ItemInvoked { index }
                        } else {
                            Action::SelectItem(index)
                        }
                    })
                }
            }
            MouseEventKind::Down(MouseButton::Right) => self
                .header_key_at(mouse.column, mouse.row)
                .map(Action::ColumnContextMenu),
            MouseEventKind::ScrollDown => Some(Action::NextItem),
            MouseEventKind::ScrollUp => Some(Action::PrevItem),
            _ => None,
        };
        if let Some(ref a) = action {
            trace!("Mouse {:?} at ({}, {}) => {}", mouse.kind, mouse.column, mouse.row, a);
        }
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::NextItem => self.move_selection(1),
            Action::PrevItem => self.move_selection(-1),
            Action::PageDown => self.move_selection(PAGE_SIZE as isize),
            Action::PageUp => self.move_selection(-(PAGE_SIZE as isize)),
            Action::FirstItem => self.select(0),
            Action::LastItem => self.select(self.items.len().saturating_sub(1)),
            Action::SelectItem(index) => self.select(index),
            Action::NextColumn => self.move_focus(1),
            Action::PrevColumn => self.move_focus(-1),
            Action::ActivateColumn(key) => {
                self.activate_column(&key);
            }
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let [table_area, tooltip_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" AEM ({}) ", self.items.len()))
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(table_area);

        let constraints: Vec<Constraint> = self
            .column_widths()
            .into_iter()
            .map(Constraint::Length)
            .collect();

        let rows: Vec<Row> = self
            .cells
            .iter()
            .map(|row| Row::new(row.iter().map(|cell| Cell::from(cell.to_span()))))
            .collect();

        let table = Table::new(rows, constraints.clone())
            .header(self.header_row())
            .block(block)
            .column_spacing(COLUMN_SPACING)
            .flex(Flex::Start)
            .highlight_spacing(HighlightSpacing::Always)
            .highlight_symbol(HIGHLIGHT_SYMBOL)
            .highlight_style(Style::default().bg(Color::Blue).add_modifier(Modifier::BOLD));

        frame.render_stateful_widget(table, table_area, &mut self.table_state);
        self.record_hit_areas(inner, &constraints);
        self.draw_tooltip(frame, tooltip_area);

        Ok(())
    }
}
