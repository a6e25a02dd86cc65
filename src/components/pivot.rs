//! Pivot container - the three-tab screen
//!
//! Keeps track of the active tab only. The entry list lives in the AEM
//! panel but is owned by the App.

use crate::action::Action;
use crate::component::Component;
use crate::components::EntryList;
use crate::model::ui::Tab;
use anyhow::Result;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

const TAB_PADDING: u16 = 1;
const TAB_DIVIDER_WIDTH: u16 = 1;

/// Tab container hosting the Guidance, AEM and AEM Summaries panels
pub struct PivotContainer {
    active_tab: Tab,
    /// Clickable x-ranges of the tab titles, recorded at draw time
    title_hits: Vec<(u16, u16)>,
    titles_y: Option<u16>,
}

impl Default for PivotContainer {
    fn default() -> Self {
        Self::new(Tab::default())
    }
}

impl PivotContainer {
    pub fn new(active_tab: Tab) -> Self {
        Self {
            active_tab,
            title_hits: Vec::new(),
            titles_y: None,
        }
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    /// Draw the tab bar and the active panel
    pub fn draw_with_list(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        list: &mut EntryList,
    ) -> Result<()> {
        let [tabs_area, panel_area] =
            Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(area);

        self.draw(frame, tabs_area)?;

        match self.active_tab {
            Tab::Guidance => draw_guidance(frame, panel_area),
            Tab::Aem => list.draw(frame, panel_area)?,
            Tab::AemSummaries => draw_summaries(frame, panel_area),
        }
        Ok(())
    }

    fn record_title_hits(&mut self, area: Rect) {
        let mut x = area.x;
        self.title_hits = Tab::all()
            .iter()
            .map(|tab| {
                let width = tab.name().width() as u16 + TAB_PADDING * 2;
                let hit = (x, width);
                x = x.saturating_add(width + TAB_DIVIDER_WIDTH);
                hit
            })
            .collect();
        self.titles_y = (area.height > 0).then_some(area.y);
    }

    fn tab_at(&self, x: u16, y: u16) -> Option<usize> {
        if self.titles_y != Some(y) {
            return None;
        }
        self.title_hits
            .iter()
            .position(|&(start, width)| x >= start && x < start.saturating_add(width))
    }
}

impl Component for PivotContainer {
    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        let action = match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.tab_at(mouse.column, mouse.row).map(Action::SelectTab)
            }
            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::NextTab => self.active_tab = self.active_tab.next(),
            Action::PrevTab => self.active_tab = self.active_tab.previous(),
            Action::SelectTab(index) => {
                if let Some(tab) = Tab::all().get(index) {
                    self.active_tab = *tab;
                }
            }
            _ => {}
        }
        Ok(None)
    }

    /// Draws the tab bar only; panels are drawn by `draw_with_list`
    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let titles: Vec<&str> = Tab::all().iter().map(|t| t.name()).collect();

        let tabs = Tabs::new(titles)
            .block(Block::default().borders(Borders::BOTTOM))
            .select(self.active_tab.index())
            .style(Style::default().fg(Color::DarkGray))
            .highlight_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            );

        frame.render_widget(tabs, area);
        self.record_title_hits(area);
        Ok(())
    }
}

fn draw_guidance(frame: &mut Frame, area: Rect) {
    let key = |k: &'static str| {
        Span::styled(
            format!("  {:10}", k),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )
    };

    let lines = vec![
        Line::from(Span::styled(
            "Access, evidence and metric entries by country",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Open the AEM tab to browse entries. Click a column header, or focus"),
        Line::from("a column and press s, to sort by it; activating it again reverses"),
        Line::from("the order."),
        Line::from(""),
        Line::from(vec![key("Tab"), Span::raw("Next tab")]),
        Line::from(vec![key("h / l"), Span::raw("Focus previous / next column")]),
        Line::from(vec![key("s"), Span::raw("Sort by focused column")]),
        Line::from(vec![key("F1-F8"), Span::raw("Sort by column n")]),
        Line::from(vec![key("Enter"), Span::raw("Open highlighted entry")]),
        Line::from(vec![key("i"), Span::raw("Entry details")]),
        Line::from(vec![key("?"), Span::raw("All shortcuts")]),
    ];

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Guidance ")
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(paragraph, area);
}

fn draw_summaries(frame: &mut Frame, area: Rect) {
    let paragraph = Paragraph::new(Line::from(Span::styled(
        "Pivot #3",
        Style::default().fg(Color::White),
    )))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(" AEM Summaries ")
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::mock_data::load_entries;
    use crossterm::event::KeyModifiers;
    use ratatui::{backend::TestBackend, Terminal};

    fn render(pivot: &mut PivotContainer, list: &mut EntryList) -> String {
        let mut terminal = Terminal::new(TestBackend::new(160, 24)).unwrap();
        terminal
            .draw(|frame| {
                pivot.draw_with_list(frame, frame.area(), list).unwrap();
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn left_click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_only_active_panel_is_drawn() {
        let mut list = EntryList::new(load_entries().unwrap());
        let mut pivot = PivotContainer::new(Tab::Aem);

        let text = render(&mut pivot, &mut list);
        assert!(text.contains("AEM (12)"));
        assert!(!text.contains("Pivot #3"));

        pivot.update(Action::NextTab).unwrap();
        let text = render(&mut pivot, &mut list);
        assert!(text.contains("Pivot #3"));
        assert!(!text.contains("AEM (12)"));

        pivot.update(Action::NextTab).unwrap();
        let text = render(&mut pivot, &mut list);
        assert!(text.contains("Sort by focused column"));
    }

    #[test]
    fn test_select_tab_ignores_out_of_range() {
        let mut pivot = PivotContainer::new(Tab::Guidance);
        pivot.update(Action::SelectTab(7)).unwrap();
        assert_eq!(pivot.active_tab(), Tab::Guidance);
        pivot.update(Action::SelectTab(2)).unwrap();
        assert_eq!(pivot.active_tab(), Tab::AemSummaries);
    }

    #[test]
    fn test_click_on_tab_title() {
        let mut list = EntryList::new(load_entries().unwrap());
        let mut pivot = PivotContainer::new(Tab::Aem);
        let _ = render(&mut pivot, &mut list);

        // " Guidance " spans x 0..10, divider at 10, " AEM " 11..16, divider at 16
        assert_eq!(
            pivot.handle_mouse_event(left_click(1, 0)).unwrap(),
            Some(Action::SelectTab(0))
        );
        assert_eq!(
            pivot.handle_mouse_event(left_click(12, 0)).unwrap(),
            Some(Action::SelectTab(1))
        );
        assert_eq!(
            pivot.handle_mouse_event(left_click(20, 0)).unwrap(),
            Some(Action::SelectTab(2))
        );
        assert_eq!(pivot.handle_mouse_event(left_click(10, 0)).unwrap(), None);
        assert_eq!(pivot.handle_mouse_event(left_click(1, 1)).unwrap(), None);
    }
}
