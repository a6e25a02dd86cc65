//! Country reference table
//!
//! Read-only mapping from country display name to its ISO 3166-1 alpha-2
//! code, used to resolve flag icons.

/// A country name with its two-letter code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Country {
    pub name: &'static str,
    pub code: &'static str,
}

const fn country(name: &'static str, code: &'static str) -> Country {
    Country { name, code }
}

pub static COUNTRIES: &[Country] = &[
    country("Argentina", "AR"),
    country("Australia", "AU"),
    country("Austria", "AT"),
    country("Belgium", "BE"),
    country("Brazil", "BR"),
    country("Bulgaria", "BG"),
    country("Canada", "CA"),
    country("Chile", "CL"),
    country("China", "CN"),
    country("Colombia", "CO"),
    country("Croatia", "HR"),
    country("Cyprus", "CY"),
    country("Czech Republic", "CZ"),
    country("Denmark", "DK"),
    country("Egypt", "EG"),
    country("Estonia", "EE"),
    country("Finland", "FI"),
    country("France", "FR"),
    country("Germany", "DE"),
    country("Greece", "GR"),
    country("Hong Kong", "HK"),
    country("Hungary", "HU"),
    country("Iceland", "IS"),
    country("India", "IN"),
    country("Indonesia", "ID"),
    country("Ireland", "IE"),
    country("Israel", "IL"),
    country("Italy", "IT"),
    country("Japan", "JP"),
    country("Kazakhstan", "KZ"),
    country("Latvia", "LV"),
    country("Lithuania", "LT"),
    country("Luxembourg", "LU"),
    country("Malaysia", "MY"),
    country("Malta", "MT"),
    country("Mexico", "MX"),
    country("Netherlands", "NL"),
    country("New Zealand", "NZ"),
    country("Norway", "NO"),
    country("Peru", "PE"),
    country("Philippines", "PH"),
    country("Poland", "PL"),
    country("Portugal", "PT"),
    country("Romania", "RO"),
    country("Russia", "RU"),
    country("Saudi Arabia", "SA"),
    country("Singapore", "SG"),
    country("Slovakia", "SK"),
    country("Slovenia", "SI"),
    country("South Africa", "ZA"),
    country("South Korea", "KR"),
    country("Spain", "ES"),
    country("Sweden", "SE"),
    country("Switzerland", "CH"),
    country("Taiwan", "TW"),
    country("Thailand", "TH"),
    country("Turkey", "TR"),
    country("Ukraine", "UA"),
    country("United Arab Emirates", "AE"),
    country("United Kingdom", "GB"),
    country("United States", "US"),
    country("Vietnam", "VN"),
];

/// Resolve a country display name to its code by exact name match.
pub fn lookup_code(name: &str) -> Option<&'static str> {
    COUNTRIES
        .iter()
        .find(|c| c.name == name)
        .map(|c| c.code)
}

/// Build the flag glyph for a two-letter code from regional indicator
/// symbols. Returns `None` unless the code is exactly two ASCII letters.
pub fn flag_emoji(code: &str) -> Option<String> {
    const REGIONAL_INDICATOR_A: u32 = 0x1F1E6;

    if code.len() != 2 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }

    code.chars()
        .map(|c| {
            let offset = c.to_ascii_uppercase() as u32 - 'A' as u32;
            char::from_u32(REGIONAL_INDICATOR_A + offset)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_lookup_known_country() {
        assert_eq!(lookup_code("France"), Some("FR"));
        assert_eq!(lookup_code("United Kingdom"), Some("GB"));
    }

    #[test]
    fn test_lookup_is_exact() {
        assert_eq!(lookup_code("Atlantis"), None);
        assert_eq!(lookup_code("france"), None);
        assert_eq!(lookup_code(" France"), None);
    }

    #[test]
    fn test_table_has_unique_names_and_codes() {
        let names: HashSet<_> = COUNTRIES.iter().map(|c| c.name).collect();
        let codes: HashSet<_> = COUNTRIES.iter().map(|c| c.code).collect();
        assert_eq!(names.len(), COUNTRIES.len());
        assert_eq!(codes.len(), COUNTRIES.len());
    }

    #[test]
    fn test_every_code_has_a_flag() {
        for c in COUNTRIES {
            assert!(flag_emoji(c.code).is_some(), "{}", c.name);
        }
    }

    #[test]
    fn test_flag_emoji() {
        assert_eq!(flag_emoji("FR").as_deref(), Some("🇫🇷"));
        assert_eq!(flag_emoji("de").as_deref(), Some("🇩🇪"));
        assert_eq!(flag_emoji("FRA"), None);
        assert_eq!(flag_emoji("F1"), None);
        assert_eq!(flag_emoji(""), None);
    }
}
