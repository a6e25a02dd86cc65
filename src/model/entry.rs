//! AEM entry model - one row of the access/evidence/metric list

use serde::{Deserialize, Serialize};

/// Review status of an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Review,
    Draft,
    Final,
}

impl Status {
    /// Parse a raw status value. Matching is exact; anything outside the
    /// closed set is not a status.
    pub fn parse(raw: &str) -> Option<Status> {
        match raw {
            "Review" => Some(Status::Review),
            "Draft" => Some(Status::Draft),
            "Final" => Some(Status::Final),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Status::Review => "Review",
            Status::Draft => "Draft",
            Status::Final => "Final",
        }
    }

    /// Tooltip caption shown for the status label
    pub fn caption(&self) -> &'static str {
        match self {
            Status::Review => "Version 1",
            Status::Draft => "Version 2",
            Status::Final => "Version 3",
        }
    }
}

/// A single field value as used for sorting and plain rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Number(i64),
}

impl FieldValue<'_> {
    pub fn to_display(&self) -> String {
        match self {
            FieldValue::Text(s) => (*s).to_string(),
            FieldValue::Number(n) => n.to_string(),
        }
    }
}

/// One row of display data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: String,
    pub country: String,
    #[serde(rename = "TA")]
    pub ta: String,
    pub asset: String,
    pub indication: String,
    pub subclassification: String,
    pub status: String,
    pub version: String,
    pub modified_by: String,
    /// Unix timestamp in seconds
    pub last_modified: i64,
}

impl Entry {
    /// Source field names in record order
    pub const FIELD_NAMES: [&'static str; 10] = [
        "id",
        "country",
        "TA",
        "asset",
        "indication",
        "subclassification",
        "status",
        "version",
        "modifiedBy",
        "lastModified",
    ];

    /// Look up a field by its source field name.
    ///
    /// Returns `None` for names that are not part of the record shape.
    pub fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        let value = match name {
            "id" => FieldValue::Text(&self.id),
            "country" => FieldValue::Text(&self.country),
            "TA" => FieldValue::Text(&self.ta),
            "asset" => FieldValue::Text(&self.asset),
            "indication" => FieldValue::Text(&self.indication),
            "subclassification" => FieldValue::Text(&self.subclassification),
            "status" => FieldValue::Text(&self.status),
            "version" => FieldValue::Text(&self.version),
            "modifiedBy" => FieldValue::Text(&self.modified_by),
            "lastModified" => FieldValue::Number(self.last_modified),
            _ => return None,
        };
        Some(value)
    }
}

#[cfg(test)]
pub(crate) fn sample_entry(id: &str) -> Entry {
    Entry {
        id: id.to_string(),
        country: "France".to_string(),
        ta: "Oncology".to_string(),
        asset: format!("Asset {}", id),
        indication: "NSCLC".to_string(),
        subclassification: "HTA".to_string(),
        status: "Draft".to_string(),
        version: "1.0".to_string(),
        modified_by: "J. Doe".to_string(),
        last_modified: 1_600_000_000,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parse() {
        assert_eq!(Status::parse("Review"), Some(Status::Review));
        assert_eq!(Status::parse("Draft"), Some(Status::Draft));
        assert_eq!(Status::parse("Final"), Some(Status::Final));
        assert_eq!(Status::parse("final"), None);
        assert_eq!(Status::parse("Pending"), None);
    }

    #[test]
    fn test_status_captions() {
        assert_eq!(Status::Review.caption(), "Version 1");
        assert_eq!(Status::Draft.caption(), "Version 2");
        assert_eq!(Status::Final.caption(), "Version 3");
    }

    #[test]
    fn test_field_lookup() {
        let entry = sample_entry("1");
        assert_eq!(entry.field("country"), Some(FieldValue::Text("France")));
        assert_eq!(entry.field("TA"), Some(FieldValue::Text("Oncology")));
        assert_eq!(
            entry.field("lastModified"),
            Some(FieldValue::Number(1_600_000_000))
        );
        assert_eq!(entry.field("thumbnail"), None);
    }

    #[test]
    fn test_every_field_name_resolves() {
        let entry = sample_entry("1");
        for name in Entry::FIELD_NAMES {
            assert!(entry.field(name).is_some(), "field {} missing", name);
        }
    }

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{
            "id": "7", "country": "Spain", "TA": "Vaccines", "asset": "VX-1",
            "indication": "Influenza", "subclassification": "Pricing",
            "status": "Final", "version": "2.1", "modifiedBy": "A. Smith",
            "lastModified": 1650000000
        }"#;
        let entry: Entry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.ta, "Vaccines");
        assert_eq!(entry.modified_by, "A. Smith");
        assert_eq!(Status::parse(&entry.status), Some(Status::Final));
    }
}
