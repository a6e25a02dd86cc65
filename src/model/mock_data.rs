//! Static AEM dataset embedded in the binary

use super::entry::Entry;
use anyhow::{Context, Result};

const AEM_ENTRIES_JSON: &str = include_str!("data/aem_entries.json");

/// Parse the embedded dataset
pub fn load_entries() -> Result<Vec<Entry>> {
    parse_entries(AEM_ENTRIES_JSON).context("Failed to parse embedded AEM dataset")
}

pub fn parse_entries(json: &str) -> Result<Vec<Entry>> {
    let entries: Vec<Entry> = serde_json::from_str(json)?;
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::country::lookup_code;
    use crate::model::entry::Status;
    use std::collections::HashSet;

    #[test]
    fn test_embedded_dataset_loads() {
        let entries = load_entries().unwrap();
        assert!(!entries.is_empty());
    }

    #[test]
    fn test_ids_are_unique() {
        let entries = load_entries().unwrap();
        let ids: HashSet<_> = entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids.len(), entries.len());
    }

    #[test]
    fn test_dataset_satisfies_reference_data() {
        for entry in load_entries().unwrap() {
            assert!(lookup_code(&entry.country).is_some(), "{}", entry.country);
            assert!(Status::parse(&entry.status).is_some(), "{}", entry.status);
        }
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        assert!(parse_entries("[{\"id\": 1}]").is_err());
        assert!(parse_entries("not json").is_err());
    }
}
