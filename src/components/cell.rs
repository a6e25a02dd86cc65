//! Per-cell rendering rules for the entry list
//!
//! `render_cell` decides how a field is shown based on the column key. It is
//! pure: it only reads the entry and the reference table.

use crate::model::column::ColumnDescriptor;
use crate::model::country::{flag_emoji, lookup_code};
use crate::model::entry::{Entry, FieldValue, Status};
use chrono::DateTime;
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
};
use tracing::{debug, warn};

/// What a cell shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellView {
    /// Flag icon for a resolved country
    Flag {
        glyph: String,
        code: &'static str,
        country: String,
    },
    /// Country with no entry in the reference table
    Placeholder { country: String },
    /// Hyperlink-styled text with no target
    Link { text: String },
    /// Colour-coded status label
    Status(Status),
    /// Raw field value
    Text(String),
}

impl CellView {
    pub fn text(&self) -> String {
        match self {
            CellView::Flag { glyph, code, .. } => format!("{} {}", glyph, code),
            CellView::Placeholder { country } => country.clone(),
            CellView::Link { text } => text.clone(),
            CellView::Status(status) => status.label().to_string(),
            CellView::Text(text) => text.clone(),
        }
    }

    /// Tooltip caption, if this cell has one
    pub fn tooltip(&self) -> Option<String> {
        match self {
            CellView::Flag { country, .. } => Some(country.clone()),
            CellView::Placeholder { country } => Some(format!("{} (no flag available)", country)),
            CellView::Status(status) => Some(status.caption().to_string()),
            CellView::Link { .. } | CellView::Text(_) => None,
        }
    }

    pub fn style(&self) -> Style {
        match self {
            CellView::Flag { .. } => Style::default().fg(Color::White),
            CellView::Placeholder { .. } => Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
            CellView::Link { .. } => Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::UNDERLINED),
            CellView::Status(status) => Style::default().fg(status_color(*status)),
            CellView::Text(_) => Style::default().fg(Color::White),
        }
    }

    pub fn to_span(&self) -> Span<'static> {
        Span::styled(self.text(), self.style())
    }
}

/// Label colour for a status
pub fn status_color(status: Status) -> Color {
    match status {
        Status::Review => Color::Rgb(0x30, 0x9e, 0xcd),
        Status::Draft => Color::Rgb(0xff, 0xc3, 0x00),
        Status::Final => Color::Rgb(0x28, 0xb4, 0x63),
    }
}

/// Decide how `entry` is shown in `column`
pub fn render_cell(entry: &Entry, column: &ColumnDescriptor) -> CellView {
    let value = entry.field(&column.field_name);

    match column.key.as_str() {
        "country" => render_flag(&raw_text(value)),
        "name" => CellView::Link {
            text: raw_text(value),
        },
        "status" => render_status(&raw_text(value)),
        "lastModified" => CellView::Text(format_timestamp(value)),
        _ => CellView::Text(raw_text(value)),
    }
}

fn raw_text(value: Option<FieldValue<'_>>) -> String {
    value.map(|v| v.to_display()).unwrap_or_default()
}

fn render_flag(country: &str) -> CellView {
    let resolved = lookup_code(country).and_then(|code| flag_emoji(code).map(|glyph| (code, glyph)));

    match resolved {
        Some((code, glyph)) => CellView::Flag {
            glyph,
            code,
            country: country.to_string(),
        },
        None => {
            warn!("No country code for {:?}, rendering name only", country);
            CellView::Placeholder {
                country: country.to_string(),
            }
        }
    }
}

fn render_status(raw: &str) -> CellView {
    match Status::parse(raw) {
        Some(status) => CellView::Status(status),
        None => {
            debug!("Unrecognized status {:?}, rendering raw value", raw);
            CellView::Text(raw.to_string())
        }
    }
}

/// Format a Unix timestamp as a calendar date, falling back to the raw value
fn format_timestamp(value: Option<FieldValue<'_>>) -> String {
    match value {
        Some(FieldValue::Number(secs)) => DateTime::from_timestamp(secs, 0)
            .map(|dt| dt.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| secs.to_string()),
        other => raw_text(other),
    }
}
