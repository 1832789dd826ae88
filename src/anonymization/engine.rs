//! Anonymization entry point
//!
//! The copy pipeline talks to the engine through [`anonymize_batch`] or, when
//! it processes many batches of the same collection, through an
//! [`Anonymizer`] that parses the field list once and reuses the rules.
//!
//! The engine is synchronous and does no I/O or logging. Any directive error
//! aborts the batch; no document is ever returned half-masked.
//!
//! # Examples
//!
//! ```
//! use shroud::anonymization::engine::anonymize_batch;
//! use shroud::domain::{Document, Value};
//! use serde_json::json;
//!
//! let docs = vec![
//!     Document::try_from(json!({"name": "Ada", "role": "admin"})).unwrap(),
//!     Document::try_from(json!({"name": "Grace", "role": "user"})).unwrap(),
//! ];
//!
//! let masked = anonymize_batch(&docs, "users", &["users.name:anonymous"]).unwrap();
//! assert_eq!(masked[0].get("name"), Some(&Value::from("anonymous")));
//! assert_eq!(masked[1].get("role"), Some(&Value::from("user")));
//! ```

use crate::anonymization::resolver::check_directive;
use crate::anonymization::rules::RuleSet;
use crate::anonymization::transformer::transform_document;
use crate::domain::{AnonymizationError, CollectionName, Document};

/// Pre-built rules for one collection
///
/// Thread-safe and cheap to share: all state is immutable after construction.
#[derive(Debug, Clone)]
pub struct Anonymizer {
    collection: CollectionName,
    rules: RuleSet,
}

impl Anonymizer {
    /// Parses `field_list` for `collection`
    pub fn for_collection<S: AsRef<str>>(collection: CollectionName, field_list: &[S]) -> Self {
        let rules = RuleSet::for_collection(field_list, collection.as_str());
        Self { collection, rules }
    }

    /// The collection these rules were parsed for
    pub fn collection(&self) -> &CollectionName {
        &self.collection
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// True when no rule applies to this collection, so documents pass through
    /// unchanged
    pub fn is_noop(&self) -> bool {
        self.rules.is_empty()
    }

    /// Anonymizes one document
    pub fn anonymize_document(&self, document: &Document) -> Result<Document, AnonymizationError> {
        transform_document(document, &self.rules)
    }

    /// Anonymizes a batch, preserving order and length
    ///
    /// # Errors
    ///
    /// The first failing document aborts the batch.
    pub fn anonymize_batch(&self, documents: &[Document]) -> Result<Vec<Document>, AnonymizationError> {
        documents
            .iter()
            .map(|document| self.anonymize_document(document))
            .collect()
    }
}

/// Anonymizes `documents` from `collection_name` with the raw `field_list`
///
/// Rules are parsed for the collection and applied to every document. The
/// output has the same length and order as the input.
///
/// # Errors
///
/// Returns the first [`AnonymizationError`] raised by a matched field's
/// directive.
pub fn anonymize_batch<S: AsRef<str>>(
    documents: &[Document],
    collection_name: &str,
    field_list: &[S],
) -> Result<Vec<Document>, AnonymizationError> {
    let rules = RuleSet::for_collection(field_list, collection_name);
    documents
        .iter()
        .map(|document| transform_document(document, &rules))
        .collect()
}

/// Checks every directive in `field_list` without touching any document
///
/// Returns the failing entries with their errors, in list order. Entries
/// without a directive, or with an empty one, always pass.
pub fn check_field_list<S: AsRef<str>>(field_list: &[S]) -> Vec<(String, AnonymizationError)> {
    field_list
        .iter()
        .map(AsRef::as_ref)
        .filter_map(|entry| {
            let (_, directive) = entry.split_once(':')?;
            if directive.is_empty() {
                return None;
            }
            check_directive(directive)
                .err()
                .map(|error| (entry.to_string(), error))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Value;
    use serde_json::json;

    fn doc(value: serde_json::Value) -> Document {
        Document::try_from(value).unwrap()
    }

    #[test]
    fn test_batch_preserves_length_and_order() {
        let docs: Vec<Document> = (0..5i64)
            .map(|i| doc(json!({"seq": i, "email": "x@y.z"})))
            .collect();

        let masked = anonymize_batch(&docs, "users", &["email"]).unwrap();

        assert_eq!(masked.len(), 5);
        for (i, document) in masked.iter().enumerate() {
            assert_eq!(document.get("seq"), Some(&Value::from(i as i64)));
            assert_ne!(document.get("email"), Some(&Value::from("x@y.z")));
        }
    }

    #[test]
    fn test_empty_batch() {
        let masked = anonymize_batch(&[], "users", &["email"]).unwrap();
        assert!(masked.is_empty());
    }

    #[test]
    fn test_other_collection_rules_ignored() {
        let docs = vec![doc(json!({"email": "keep@me.com"}))];
        let masked = anonymize_batch(&docs, "users", &["orders.email"]).unwrap();
        assert_eq!(masked, docs);
    }

    #[test]
    fn test_empty_field_list_is_identity() {
        let docs = vec![doc(json!({"email": "keep@me.com", "nested": {"name": "x"}}))];
        let masked = anonymize_batch::<&str>(&docs, "users", &[]).unwrap();
        assert_eq!(masked, docs);
    }

    #[test]
    fn test_error_aborts_batch() {
        let docs = vec![doc(json!({"id": 1i64})), doc(json!({"notes": "x"}))];
        let err = anonymize_batch(&docs, "users", &["notes:[invalid-json"]).unwrap_err();
        assert!(matches!(err, AnonymizationError::Parse { .. }));
    }

    #[test]
    fn test_anonymizer_reuse() {
        let anonymizer = Anonymizer::for_collection(
            CollectionName::new("users").unwrap(),
            &["users.ssn:***", "orders.total:0"],
        );
        assert_eq!(anonymizer.rules().len(), 1);
        assert!(!anonymizer.is_noop());
        assert_eq!(anonymizer.collection().as_str(), "users");

        for _ in 0..3 {
            let batch = vec![doc(json!({"ssn": "123-45-6789"}))];
            let masked = anonymizer.anonymize_batch(&batch).unwrap();
            assert_eq!(masked[0].get("ssn"), Some(&Value::from("***")));
        }
    }

    #[test]
    fn test_anonymizer_noop() {
        let anonymizer =
            Anonymizer::for_collection(CollectionName::new("users").unwrap(), &["orders.total"]);
        assert!(anonymizer.is_noop());
    }

    #[test]
    fn test_check_field_list_reports_each_bad_entry() {
        let failures = check_field_list(&[
            "email:faker.internet.email",
            "users.phone:faker.nope.number",
            "notes",
            "tags:[not json",
            "city:",
            "name:faker.person",
        ]);

        let entries: Vec<&str> = failures.iter().map(|(entry, _)| entry.as_str()).collect();
        assert_eq!(
            entries,
            vec!["users.phone:faker.nope.number", "tags:[not json", "name:faker.person"]
        );
        assert!(matches!(failures[0].1, AnonymizationError::Category { .. }));
        assert!(matches!(failures[1].1, AnonymizationError::Parse { .. }));
        assert!(matches!(failures[2].1, AnonymizationError::Format { .. }));
    }
}
