//! Action enum - All possible application actions
//!
//! Components turn key and mouse events into Actions; the App applies them.

use std::fmt;

/// All possible actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick when no input arrived
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Quit without confirmation
    ForceQuit,

    // ─────────────────────────────────────────────────────────────────────────
    // Tabs
    // ─────────────────────────────────────────────────────────────────────────
    NextTab,
    PrevTab,
    /// Select a tab by position
    SelectTab(usize),

    // ─────────────────────────────────────────────────────────────────────────
    // Entry list
    // ─────────────────────────────────────────────────────────────────────────
    NextItem,
    PrevItem,
    FirstItem,
    LastItem,
    PageUp,
    PageDown,
    /// Highlight a row by its position in the current order
    SelectItem(usize),
    /// Move column focus right
    NextColumn,
    /// Move column focus left
    PrevColumn,
    /// Column header activated (sort by column key)
    ActivateColumn(String),
    /// Context menu requested on a column header
    ColumnContextMenu(String),
    /// Row activated
    ItemInvoked { index: usize },

    // ─────────────────────────────────────────────────────────────────────────
    // Modals
    // ─────────────────────────────────────────────────────────────────────────
    OpenQuitDialog,
    OpenHelp,
    /// Show all fields of the highlighted entry
    OpenEntryDetail,
    CloseModal,
    ConfirmModal,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::ForceQuit => write!(f, "ForceQuit"),
            Action::NextTab => write!(f, "NextTab"),
            Action::PrevTab => write!(f, "PrevTab"),
            Action::SelectTab(i) => write!(f, "SelectTab({})", i),
            Action::NextItem => write!(f, "NextItem"),
            Action::PrevItem => write!(f, "PrevItem"),
            Action::FirstItem => write!(f, "FirstItem"),
            Action::LastItem => write!(f, "LastItem"),
            Action::PageUp => write!(f, "PageUp"),
            Action::PageDown => write!(f, "PageDown"),
            Action::SelectItem(i) => write!(f, "SelectItem({})", i),
            Action::NextColumn => write!(f, "NextColumn"),
            Action::PrevColumn => write!(f, "PrevColumn"),
            Action::ActivateColumn(key) => write!(f, "ActivateColumn({})", key),
            Action::ColumnContextMenu(key) => write!(f, "ColumnContextMenu({})", key),
            Action::ItemInvoked { index } => write!(f, "ItemInvoked({})", index),
            Action::OpenQuitDialog => write!(f, "OpenQuitDialog"),
            Action::OpenHelp => write!(f, "OpenHelp"),
            Action::OpenEntryDetail => write!(f, "OpenEntryDetail"),
            Action::CloseModal => write!(f, "CloseModal"),
            Action::ConfirmModal => write!(f, "ConfirmModal"),
        }
    }
}
