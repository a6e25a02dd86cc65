//! Entry detail dialog
//!
//! Shows every field of one entry with the cells already rendered for the
//! list.

use crate::action::Action;
use crate::component::Component;
use crate::components::cell::CellView;
use crate::components::centered_popup;
use crate::model::column::ColumnDescriptor;
use crate::model::entry::Entry;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const LABEL_WIDTH: usize = 20;

#[derive(Default)]
pub struct EntryDetailDialog;

impl EntryDetailDialog {
    pub fn draw_with_entry(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        entry: &Entry,
        columns: &[ColumnDescriptor],
        cells: &[CellView],
    ) -> Result<()> {
        let content = build_detail_lines(entry, columns, cells);
        let height = content.len() as u16 + 2;
        let popup_area = centered_popup(area, 64, height);

        frame.render_widget(Clear, popup_area);

        let paragraph = Paragraph::new(content).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Entry {} ", entry.id))
                .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                .border_style(Style::default().fg(Color::Cyan)),
        );
        frame.render_widget(paragraph, popup_area);
        Ok(())
    }
}

impl Component for EntryDetailDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('i') | KeyCode::Enter => {
                Some(Action::CloseModal)
            }
            _ => None,
        };
        Ok(action)
    }

    /// Needs an entry; see `draw_with_entry`
    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        Ok(())
    }
}

fn build_detail_lines(
    entry: &Entry,
    columns: &[ColumnDescriptor],
    cells: &[CellView],
) -> Vec<Line<'static>> {
    let label = |text: &str| {
        Span::styled(
            format!(" {:width$}", text, width = LABEL_WIDTH),
            Style::default().fg(Color::DarkGray),
        )
    };

    let mut lines = Vec::new();
    for (column, cell) in columns.iter().zip(cells) {
        let mut spans = vec![label(&column.name), cell.to_span()];
        if let Some(tooltip) = cell.tooltip() {
            spans.push(Span::styled(
                format!("  ({})", tooltip),
                Style::default().fg(Color::DarkGray),
            ));
        }
        lines.push(Line::from(spans));
    }

    // Fields without a display column
    lines.push(Line::from(vec![
        label("Version"),
        Span::raw(entry.version.clone()),
    ]));
    lines.push(Line::from(vec![label("ID"), Span::raw(entry.id.clone())]));

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::cell::render_cell;
    use crate::model::column::display_columns;
    use crate::model::entry::sample_entry;
    use ratatui::{backend::TestBackend, Terminal};

    fn cells_for(entry: &Entry, columns: &[ColumnDescriptor]) -> Vec<CellView> {
        columns.iter().map(|c| render_cell(entry, c)).collect()
    }

    #[test]
    fn test_detail_lists_every_column() {
        let entry = sample_entry("5");
        let columns = display_columns();
        let cells = cells_for(&entry, &columns);
        let lines = build_detail_lines(&entry, &columns, &cells);
        assert_eq!(lines.len(), columns.len() + 2);
    }

    #[test]
    fn test_detail_draws_tooltips() {
        let entry = Entry {
            status: "Final".to_string(),
            ..sample_entry("5")
        };
        let columns = display_columns();
        let cells = cells_for(&entry, &columns);
        let mut dialog = EntryDetailDialog;
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal
            .draw(|frame| {
                dialog
                    .draw_with_entry(frame, frame.area(), &entry, &columns, &cells)
                    .unwrap();
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content.iter().map(|c| c.symbol()).collect();
        assert!(text.contains("Entry 5"));
        assert!(text.contains("(Version 3)"));
        assert!(text.contains("(France)"));
    }

    #[test]
    fn test_detail_shows_given_cells() {
        let entry = sample_entry("5");
        let columns = display_columns();
        let mut cells = cells_for(&entry, &columns);
        cells[1] = CellView::Placeholder {
            country: "Atlantis".to_string(),
        };

        let lines = build_detail_lines(&entry, &columns, &cells);
        let country: String = lines[1].spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(country.contains("Atlantis (no flag available)"));
    }
}
