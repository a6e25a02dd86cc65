//! Root application component
//!
//! The App owns the pivot container, the entry list and the dialogs. It
//! routes input to whichever of them is in front and applies the resulting
//! Actions.

use crate::action::Action;
use crate::component::Component;
use crate::components::{
    calculate_main_layout, EntryDetailDialog, EntryList, HelpDialog, PivotContainer, QuitDialog,
};
use crate::config::Config;
use crate::model::entry::Entry;
use crate::model::modal::{Modal, ModalStack};
use crate::model::ui::Tab;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use tracing::{debug, info, warn};

/// Main application state - coordinates between components
pub struct App {
    /// Modal overlay stack
    pub modals: ModalStack,

    /// Flag to indicate the app should quit
    pub should_quit: bool,

    /// Last notification shown in the status bar
    pub status_message: Option<String>,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub pivot: PivotContainer,
    pub entry_list: EntryList,
    pub quit_dialog: QuitDialog,
    pub help_dialog: HelpDialog,
    pub entry_detail_dialog: EntryDetailDialog,
}

impl App {
    pub fn new(config: &Config, entries: Vec<Entry>) -> App {
        let initial_tab = Tab::from_name(&config.initial_tab).unwrap_or_else(|| {
            warn!("Unknown initial tab {:?}, using {}", config.initial_tab, Tab::default().name());
            Tab::default()
        });

        let mut entry_list = EntryList::new(entries);
        if let Some(ref key) = config.default_sort {
            if !entry_list.activate_column(key) {
                warn!("Unknown default sort column {:?}", key);
            }
        }

        info!(
            "Loaded {} entries, starting on {}",
            entry_list.items().len(),
            initial_tab.name()
        );

        App {
            modals: ModalStack::new(),
            should_quit: false,
            status_message: None,
            pivot: PivotContainer::new(initial_tab),
            entry_list,
            quit_dialog: QuitDialog,
            help_dialog: HelpDialog::default(),
            entry_detail_dialog: EntryDetailDialog,
        }
    }

    fn list_is_active(&self) -> bool {
        self.pivot.active_tab() == Tab::Aem
    }

    fn sort_description(&self) -> Option<String> {
        self.entry_list
            .columns()
            .iter()
            .find(|c| c.is_sorted())
            .map(|c| format!("Sorted by {}", c.header_label()))
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for App {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(Some(Action::ForceQuit));
        }

        if let Some(modal) = self.modals.top().cloned() {
            return self.handle_modal_key_event(&modal, key);
        }

        let action = match key.code {
            KeyCode::Char('q') => Some(Action::OpenQuitDialog),
            KeyCode::Char('?') => Some(Action::OpenHelp),
            KeyCode::Tab => Some(Action::NextTab),
            KeyCode::BackTab => Some(Action::PrevTab),
            _ if self.list_is_active() => return self.entry_list.handle_key_event(key),
            _ => None,
        };
        Ok(action)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if !self.modals.is_empty() {
            return Ok(None);
        }

        if let Some(action) = self.pivot.handle_mouse_event(mouse)? {
            return Ok(Some(action));
        }

        if self.list_is_active() {
            self.entry_list.handle_mouse_event(mouse)
        } else {
            Ok(None)
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            // ─────────────────────────────────────────────────────────────────
            // App Lifecycle
            // ─────────────────────────────────────────────────────────────────
            Action::Tick | Action::Resize(_, _) => {}
            Action::ForceQuit => {
                self.should_quit = true;
            }

            // ─────────────────────────────────────────────────────────────────
            // Tabs (delegate to PivotContainer)
            // ─────────────────────────────────────────────────────────────────
            Action::NextTab | Action::PrevTab | Action::SelectTab(_) => {
                self.pivot.update(action)?;
            }

            // ─────────────────────────────────────────────────────────────────
            // Entry list (delegate to EntryList)
            // ─────────────────────────────────────────────────────────────────
            Action::NextItem
            | Action::PrevItem
            | Action::FirstItem
            | Action::LastItem
            | Action::PageUp
            | Action::PageDown
            | Action::SelectItem(_)
            | Action::NextColumn
            | Action::PrevColumn => {
                self.entry_list.update(action)?;
            }
            Action::ActivateColumn(_) => {
                self.entry_list.update(action)?;
                self.status_message = self.sort_description();
            }
            Action::ColumnContextMenu(key) => {
                info!("column {} contextmenu opened.", key);
            }
            Action::ItemInvoked { index } => {
                if let Some(entry) = self.entry_list.items().get(index) {
                    let message =
                        format!("Item {} at index {} has been invoked.", entry.asset, index);
                    info!("{}", message);
                    self.status_message = Some(message);
                }
            }

            // ─────────────────────────────────────────────────────────────────
            // Modals
            // ─────────────────────────────────────────────────────────────────
            Action::OpenQuitDialog => {
                self.modals.push(Modal::QuitConfirm);
            }
            Action::OpenHelp => {
                self.help_dialog.scroll_offset = 0;
                self.modals.push(Modal::Help);
            }
            Action::OpenEntryDetail => {
                if let Some(index) = self.entry_list.selected_index() {
                    self.modals.push(Modal::EntryDetail { index });
                }
            }
            Action::CloseModal => {
                self.modals.pop();
            }
            Action::ConfirmModal => {
                if self.modals.top() == Some(&Modal::QuitConfirm) {
                    self.should_quit = true;
                }
                self.modals.pop();
            }
        }

        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let layout = calculate_main_layout(area);

        self.pivot
            .draw_with_list(frame, layout.pivot, &mut self.entry_list)?;
        render_status_bar(frame, layout.status, self.status_message.as_deref());
        render_help_bar(frame, layout.help);

        if let Some(modal) = self.modals.top().cloned() {
            self.draw_modal(frame, area, &modal)?;
        }
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Helper Methods
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    fn handle_modal_key_event(&mut self, modal: &Modal, key: KeyEvent) -> Result<Option<Action>> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.handle_key_event(key),
            Modal::Help => self.help_dialog.handle_key_event(key),
            Modal::EntryDetail { .. } => self.entry_detail_dialog.handle_key_event(key),
        }
    }

    fn draw_modal(&mut self, frame: &mut Frame, area: Rect, modal: &Modal) -> Result<()> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.draw(frame, area)?,
            Modal::Help => self.help_dialog.draw(frame, area)?,
            Modal::EntryDetail { index } => {
                let entry = self.entry_list.items().get(*index);
                match (entry, self.entry_list.cells_at(*index)) {
                    (Some(entry), Some(cells)) => self.entry_detail_dialog.draw_with_entry(
                        frame,
                        area,
                        entry,
                        self.entry_list.columns(),
                        cells,
                    )?,
                    _ => debug!("Entry detail for missing index {}", index),
                }
            }
        }
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Rendering Functions
// ═══════════════════════════════════════════════════════════════════════════════

fn render_status_bar(frame: &mut Frame, area: Rect, status_message: Option<&str>) {
    let line = match status_message {
        Some(message) => Line::from(Span::styled(
            format!(" {} ", message),
            Style::default().fg(Color::Yellow),
        )),
        None => Line::from(""),
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn render_help_bar(frame: &mut Frame, area: Rect) {
    let key = |k: &'static str, color: Color| {
        Span::styled(k, Style::default().fg(color).add_modifier(Modifier::BOLD))
    };

    let spans = vec![
        key(" q ", Color::Yellow),
        Span::raw("Quit "),
        key(" Tab ", Color::Cyan),
        Span::raw("Next tab "),
        key(" s ", Color::Green),
        Span::raw("Sort "),
        key(" Enter ", Color::Green),
        Span::raw("Open "),
        key(" i ", Color::Cyan),
        Span::raw("Details "),
        key(" ? ", Color::White),
        Span::raw("Help"),
    ];

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
