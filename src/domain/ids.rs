//! Domain identifier types with validation

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Collection name newtype wrapper
///
/// Names a group of documents that share an anonymization scope. Maps to a
/// table in PostgreSQL and to a `<name>.jsonl` file in a JSON-lines directory.
///
/// # Examples
///
/// ```
/// use shroud::domain::ids::CollectionName;
/// use std::str::FromStr;
///
/// let name = CollectionName::from_str("users").unwrap();
/// assert_eq!(name.as_str(), "users");
/// assert_eq!(name.qualifier(), "users.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CollectionName(String);

impl CollectionName {
    /// Creates a new CollectionName from a string
    ///
    /// Rejects empty names and names containing path separators or NUL bytes,
    /// since the name doubles as a file stem for the JSON-lines store.
    pub fn new(name: impl Into<String>) -> Result<Self, String> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err("Collection name cannot be empty".to_string());
        }
        if name.contains(['/', '\\', '\0']) {
            return Err(format!(
                "Collection name '{name}' contains an illegal character"
            ));
        }
        Ok(Self(name))
    }

    /// Returns the collection name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }

    /// The `<name>.` prefix used to scope field-list entries to this collection
    pub fn qualifier(&self) -> String {
        format!("{}.", self.0)
    }
}

impl fmt::Display for CollectionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CollectionName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for CollectionName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
