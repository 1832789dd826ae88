//! Document transformation
//!
//! Walks a document depth-first and rebuilds it with targeted fields replaced.
//! Matching is by the lowercased field name at each level; a field that is
//! not on the list is copied as-is and never descended into, even when it
//! contains listed fields further down. Once a listed container field is
//! found, its contents are walked with the same global rule set.

use crate::anonymization::resolver;
use crate::anonymization::rules::RuleSet;
use crate::domain::{AnonymizationError, Document, Value};

/// Returns an anonymized copy of `document`
///
/// The input is not modified. Field order and original field-name casing are
/// preserved.
///
/// # Errors
///
/// The first directive that fails to resolve aborts the whole document.
///
/// # Examples
///
/// ```
/// use shroud::anonymization::rules::RuleSet;
/// use shroud::anonymization::transformer::transform_document;
/// use shroud::domain::{Document, Value};
/// use serde_json::json;
///
/// let rules = RuleSet::for_collection(&["email:hidden"], "users");
/// let doc = Document::try_from(json!({"Email": "a@b.c", "age": 40})).unwrap();
///
/// let masked = transform_document(&doc, &rules).unwrap();
/// assert_eq!(masked.get("Email"), Some(&Value::from("hidden")));
/// assert_eq!(masked.get("age"), doc.get("age"));
/// ```
pub fn transform_document(document: &Document, rules: &RuleSet) -> Result<Document, AnonymizationError> {
    let mut transformed = Document::with_capacity(document.len());

    for (key, value) in document.iter() {
        let field = key.to_lowercase();
        let replacement = if rules.matches(&field) {
            transform_matched(&field, value, rules)?
        } else {
            value.clone()
        };
        transformed.push(key, replacement);
    }

    Ok(transformed)
}

/// Rewrites the value of a listed field
///
/// Non-empty arrays keep their shape and each element is handled on its own:
/// objects are walked as documents, nested arrays recurse, scalars are
/// resolved with this field's rule. Objects are walked as documents. Every
/// other value, including `null` and `[]`, is replaced by the resolved value.
fn transform_matched(field: &str, value: &Value, rules: &RuleSet) -> Result<Value, AnonymizationError> {
    match value {
        Value::Array(items) if !items.is_empty() => items
            .iter()
            .map(|item| transform_matched(field, item, rules))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        Value::Object(nested) => transform_document(nested, rules).map(Value::Object),
        _ => resolver::resolve(field, rules.directive_for(field)),
    }
}
