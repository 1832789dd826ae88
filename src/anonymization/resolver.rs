//! Replacement resolution
//!
//! Maps a rule's directive (or its absence) to the concrete replacement value.

use crate::anonymization::directive::Directive;
use crate::anonymization::generator::{self, GeneratorRegistry};
use crate::domain::{AnonymizationError, Document, Value};

/// Message used when a structured literal is not valid percent-encoding
const MALFORMED_URI: &str = "URI malformed";

/// Resolves the replacement value for one field
///
/// With no directive (or an empty one) the value comes from the field-name
/// heuristic. Otherwise the directive is classified and resolved.
///
/// # Errors
///
/// Propagates [`AnonymizationError`] from generator selectors and structured
/// literals. Nothing falls back to a default value.
///
/// # Examples
///
/// ```
/// use shroud::anonymization::resolver::resolve;
/// use shroud::domain::Value;
///
/// assert_eq!(resolve("notes", Some("null")).unwrap(), Value::Null);
/// assert_eq!(resolve("notes", Some("REDACTED")).unwrap(), Value::from("REDACTED"));
/// assert!(resolve("notes", Some("[invalid-json")).is_err());
/// ```
pub fn resolve(field_name: &str, directive: Option<&str>) -> Result<Value, AnonymizationError> {
    match directive.filter(|raw| !raw.is_empty()) {
        None => Ok(generator::generate_for_field(field_name)),
        Some(raw) => resolve_directive(raw),
    }
}

/// Resolves a non-empty directive
pub fn resolve_directive(raw: &str) -> Result<Value, AnonymizationError> {
    match Directive::classify(raw) {
        Directive::Generator(selector) => generator::generate_explicit(selector),
        Directive::EmptyArray => Ok(Value::Array(Vec::new())),
        Directive::EmptyObject => Ok(Value::Object(Document::new())),
        Directive::Null => Ok(Value::Null),
        Directive::StructuredLiteral(text) => parse_structured_literal(text),
        Directive::Literal(text) => Ok(Value::String(text.to_string())),
    }
}

/// Checks that a directive would resolve, without generating anything
///
/// Used to reject a bad field list before any document is copied.
pub fn check_directive(raw: &str) -> Result<(), AnonymizationError> {
    match Directive::classify(raw) {
        Directive::Generator(selector) => GeneratorRegistry::global().resolve(selector).map(|_| ()),
        Directive::StructuredLiteral(text) => parse_structured_literal(text).map(|_| ()),
        _ => Ok(()),
    }
}

/// URL-decodes and parses a `[`/`{` literal
fn parse_structured_literal(raw: &str) -> Result<Value, AnonymizationError> {
    let parse_error = |message: String| AnonymizationError::Parse {
        directive: raw.to_string(),
        message,
    };

    let decoded = decode_uri_component(raw).map_err(|message| parse_error(message.to_string()))?;
    let parsed: serde_json::Value =
        serde_json::from_str(&decoded).map_err(|e| parse_error(e.to_string()))?;

    Ok(Value::from(parsed))
}

/// Strict percent-decoding: every `%` must start a two-digit hex escape and
/// the decoded bytes must be UTF-8. `+` is not treated as a space.
fn decode_uri_component(input: &str) -> Result<String, &'static str> {
    let bytes = input.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'%' {
            let escape = bytes
                .get(i + 1..i + 3)
                .filter(|hex| hex.iter().all(u8::is_ascii_hexdigit))
                .and_then(|hex| std::str::from_utf8(hex).ok())
                .and_then(|hex| u8::from_str_radix(hex, 16).ok())
                .ok_or(MALFORMED_URI)?;
            decoded.push(escape);
            i += 3;
        } else {
            decoded.push(bytes[i]);
            i += 1;
        }
    }

    String::from_utf8(decoded).map_err(|_| MALFORMED_URI)
}
