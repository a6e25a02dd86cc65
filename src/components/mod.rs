//! UI Components
//!
//! Each component encapsulates its own state, event handling, and rendering logic.
//! Components communicate through Actions rather than direct state mutation.

pub mod cell;
pub mod entry_detail_dialog;
pub mod entry_list;
pub mod help_dialog;
pub mod layout;
pub mod pivot;
pub mod quit_dialog;

pub use entry_detail_dialog::EntryDetailDialog;
pub use entry_list::EntryList;
pub use help_dialog::HelpDialog;
pub use layout::{calculate_main_layout, centered_popup};
pub use pivot::PivotContainer;
pub use quit_dialog::QuitDialog;
