//! Field-list parsing
//!
//! Turns the flat field list (`[collection.]field[:directive]` entries) into
//! the [`AnonymizationRule`]s that apply to one collection.

use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

/// One parsed field-list entry, scoped to a single collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnonymizationRule {
    /// Lowercased leaf field name, without collection qualifier
    pub field: String,

    /// Replacement directive exactly as written after the first `:`
    pub replacement: Option<String>,
}

impl AnonymizationRule {
    /// Creates a rule; the field name is lowercased
    pub fn new(field: impl Into<String>, replacement: Option<String>) -> Self {
        Self {
            field: field.into().to_lowercase(),
            replacement,
        }
    }
}

/// Entries starting with `word.` are collection-qualified
fn qualifier_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[A-Za-z_]+\.").expect("qualifier pattern is valid"))
}

/// Parses the rules that apply to `collection_name`
///
/// Entries qualified with another collection's name are dropped. Unqualified
/// entries apply to every collection. Malformed directives are kept as-is and
/// only fail when they are resolved.
///
/// # Examples
///
/// ```
/// use shroud::anonymization::rules::{parse_rules, AnonymizationRule};
///
/// let rules = parse_rules(
///     &["users.firstName", "orders.total", "email:faker.internet.email"],
///     "users",
/// );
/// assert_eq!(
///     rules,
///     vec![
///         AnonymizationRule::new("firstname", None),
///         AnonymizationRule::new("email", Some("faker.internet.email".to_string())),
///     ]
/// );
/// ```
pub fn parse_rules<S: AsRef<str>>(raw_list: &[S], collection_name: &str) -> Vec<AnonymizationRule> {
    let qualifier = format!("{collection_name}.");

    raw_list
        .iter()
        .map(AsRef::as_ref)
        .filter(|entry| !qualifier_pattern().is_match(entry) || entry.starts_with(&qualifier))
        .map(|entry| {
            let unscoped = entry.strip_prefix(&qualifier).unwrap_or(entry);
            match unscoped.split_once(':') {
                Some((field, directive)) => {
                    AnonymizationRule::new(field, Some(directive.to_string()))
                }
                None => AnonymizationRule::new(unscoped, None),
            }
        })
        .collect()
}

/// The rules for one collection plus the set of field names they match
///
/// Built once per collection and shared read-only by every document
/// transformation in that collection.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<AnonymizationRule>,
    field_names: HashSet<String>,
}

impl RuleSet {
    /// Builds a rule set from parsed rules
    pub fn new(rules: Vec<AnonymizationRule>) -> Self {
        let field_names = rules.iter().map(|rule| rule.field.clone()).collect();
        Self { rules, field_names }
    }

    /// Parses `raw_list` for `collection_name` and builds the rule set
    pub fn for_collection<S: AsRef<str>>(raw_list: &[S], collection_name: &str) -> Self {
        Self::new(parse_rules(raw_list, collection_name))
    }

    /// True if `lowercase_field` is named by any rule
    pub fn matches(&self, lowercase_field: &str) -> bool {
        self.field_names.contains(lowercase_field)
    }

    /// Directive of the first rule naming `lowercase_field`
    ///
    /// Returns `None` both when no rule matches and when the first matching
    /// rule has no directive.
    pub fn directive_for(&self, lowercase_field: &str) -> Option<&str> {
        self.rules
            .iter()
            .find(|rule| rule.field == lowercase_field)
            .and_then(|rule| rule.replacement.as_deref())
    }

    /// All rules in field-list order
    pub fn rules(&self) -> &[AnonymizationRule] {
        &self.rules
    }

    /// Number of rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// True when no field is targeted
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
