//! Collection selection

use crate::config::schema::CopyConfig;

/// Why a source collection was not copied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Listed in `ignore_collections`
    Ignored,
    /// `collections` is non-empty and does not list it
    NotSelected,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ignored => write!(f, "ignored"),
            Self::NotSelected => write!(f, "not selected"),
        }
    }
}

/// Include/ignore lists applied to source collection names
///
/// Names compare exactly. Blank entries are dropped, so an empty include
/// option never reduces to a filter that matches nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectionFilter {
    include: Vec<String>,
    ignore: Vec<String>,
}

impl CollectionFilter {
    pub fn new<S: AsRef<str>>(include: &[S], ignore: &[S]) -> Self {
        Self {
            include: non_blank(include),
            ignore: non_blank(ignore),
        }
    }

    pub fn from_config(config: &CopyConfig) -> Self {
        Self::new(
            config.collections.as_slice(),
            config.ignore_collections.as_slice(),
        )
    }

    /// `None` when the collection is copied
    pub fn skip_reason(&self, collection: &str) -> Option<SkipReason> {
        if self.ignore.iter().any(|name| name == collection) {
            return Some(SkipReason::Ignored);
        }
        if !self.include.is_empty() && !self.include.iter().any(|name| name == collection) {
            return Some(SkipReason::NotSelected);
        }
        None
    }

    pub fn is_selected(&self, collection: &str) -> bool {
        self.skip_reason(collection).is_none()
    }

    /// Names in the include list that the source does not have
    pub fn missing_from<'a>(&'a self, available: &'a [String]) -> impl Iterator<Item = &'a str> {
        self.include
            .iter()
            .filter(move |name| !available.contains(name))
            .map(String::as_str)
    }
}

fn non_blank<S: AsRef<str>>(entries: &[S]) -> Vec<String> {
    entries
        .iter()
        .map(|entry| entry.as_ref().trim())
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(&[], &[], "users", None ; "no lists copies everything")]
    #[test_case(&["users"], &[], "orders", Some(SkipReason::NotSelected) ; "include list excludes others")]
    #[test_case(&["users"], &[], "users", None ; "include list keeps listed")]
    #[test_case(&[], &["audit"], "audit", Some(SkipReason::Ignored) ; "ignore list")]
    #[test_case(&["audit"], &["audit"], "audit", Some(SkipReason::Ignored) ; "ignore wins over include")]
    #[test_case(&[""], &[], "users", None ; "blank include entry is dropped")]
    #[test_case(&[" ", ""], &[""], "users", None ; "only blank entries")]
    fn test_skip_reason(include: &[&str], ignore: &[&str], collection: &str, expected: Option<SkipReason>) {
        let filter = CollectionFilter::new(include, ignore);
        assert_eq!(filter.skip_reason(collection), expected);
    }

    #[test]
    fn test_from_config() {
        let config = CopyConfig {
            collections: vec!["users".to_string(), "orders".to_string()],
            ignore_collections: vec!["orders".to_string()],
            ..Default::default()
        };
        let filter = CollectionFilter::from_config(&config);

        assert!(filter.is_selected("users"));
        assert!(!filter.is_selected("orders"));
        assert!(!filter.is_selected("audit"));
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let filter = CollectionFilter::new(&["Users"], &[]);
        assert!(!filter.is_selected("users"));
    }

    #[test]
    fn test_missing_from() {
        let filter = CollectionFilter::new(&["users", "ghosts"], &[]);
        let available = vec!["users".to_string(), "orders".to_string()];
        let missing: Vec<&str> = filter.missing_from(&available).collect();
        assert_eq!(missing, vec!["ghosts"]);
    }
}
