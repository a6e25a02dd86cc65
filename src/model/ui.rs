//! UI state - presentation state separate from domain data

/// Tab selection in the pivot container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    Guidance,
    #[default]
    Aem,
    AemSummaries,
}

impl Tab {
    pub fn all() -> [Tab; 3] {
        [Tab::Guidance, Tab::Aem, Tab::AemSummaries]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Tab::Guidance => "Guidance",
            Tab::Aem => "AEM",
            Tab::AemSummaries => "AEM Summaries",
        }
    }

    /// Find a tab by its display name, ignoring case
    pub fn from_name(name: &str) -> Option<Tab> {
        Tab::all()
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(name.trim()))
    }

    pub fn index(&self) -> usize {
        Tab::all().iter().position(|t| t == self).unwrap_or(0)
    }

    pub fn next(&self) -> Tab {
        let tabs = Tab::all();
        tabs[(self.index() + 1) % tabs.len()]
    }

    pub fn previous(&self) -> Tab {
        let tabs = Tab::all();
        tabs[(self.index() + tabs.len() - 1) % tabs.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(Tab::from_name("AEM"), Some(Tab::Aem));
        assert_eq!(Tab::from_name("aem summaries"), Some(Tab::AemSummaries));
        assert_eq!(Tab::from_name(" Guidance "), Some(Tab::Guidance));
        assert_eq!(Tab::from_name("Settings"), None);
    }

    #[test]
    fn test_cycling_wraps() {
        assert_eq!(Tab::Guidance.next(), Tab::Aem);
        assert_eq!(Tab::AemSummaries.next(), Tab::Guidance);
        assert_eq!(Tab::Guidance.previous(), Tab::AemSummaries);
        assert_eq!(Tab::Aem.previous(), Tab::Guidance);
    }
}
