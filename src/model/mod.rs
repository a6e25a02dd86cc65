//! Model layer
//!
//! - `entry` / `column` / `sort` - the AEM rows, their columns and ordering
//! - `country` - read-only country reference table
//! - `mock_data` - the embedded dataset
//! - `ui` / `modal` - presentation state

pub mod column;
pub mod country;
pub mod entry;
pub mod mock_data;
pub mod modal;
pub mod sort;
pub mod ui;
