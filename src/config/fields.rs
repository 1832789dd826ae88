//! Field-list arithmetic
//!
//! The `fields` option either replaces the default field list or modifies it:
//!
//! | option          | result                          |
//! |-----------------|---------------------------------|
//! | empty           | the defaults                    |
//! | `+ssn,dob`      | the defaults followed by ssn, dob |
//! | `-comment,city` | the defaults without comment, city |
//! | `a,b`           | exactly `a`, `b`                |

/// Fields anonymized when nothing else is configured
pub const DEFAULT_FIELDS: &[&str] = &[
    "email",
    "name",
    "description",
    "address",
    "city",
    "country",
    "phone",
    "comment",
    "birthdate",
];

/// The built-in default field list as owned strings
pub fn default_field_list() -> Vec<String> {
    DEFAULT_FIELDS.iter().map(|field| field.to_string()).collect()
}

/// Applies the `fields` option to `defaults`
///
/// Entries are trimmed and blank entries dropped. Removal with `-` compares
/// whole entries, so `-users.email` only removes an entry written exactly as
/// `users.email`.
///
/// # Examples
///
/// ```
/// use shroud::config::fields::resolve_field_list;
///
/// let defaults = vec!["email".to_string(), "name".to_string()];
/// assert_eq!(resolve_field_list("", &defaults), defaults);
/// assert_eq!(resolve_field_list("+ssn", &defaults), vec!["email", "name", "ssn"]);
/// assert_eq!(resolve_field_list("-name", &defaults), vec!["email"]);
/// assert_eq!(resolve_field_list("ssn:***", &defaults), vec!["ssn:***"]);
/// ```
pub fn resolve_field_list(option: &str, defaults: &[String]) -> Vec<String> {
    let option = option.trim();

    if option.is_empty() {
        return defaults.to_vec();
    }

    if let Some(additions) = option.strip_prefix('+') {
        return defaults
            .iter()
            .cloned()
            .chain(split_entries(additions))
            .collect();
    }

    if let Some(removals) = option.strip_prefix('-') {
        let removals: Vec<String> = split_entries(removals).collect();
        return defaults
            .iter()
            .filter(|field| !removals.contains(field))
            .cloned()
            .collect();
    }

    split_entries(option).collect()
}

fn split_entries(list: &str) -> impl Iterator<Item = String> + '_ {
    list.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
}
