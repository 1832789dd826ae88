//! Edge case tests for the anonymization engine

use serde_json::json;
use shroud::anonymization::anonymize_batch;
use shroud::anonymization::generator::{generate_for_field, SyntheticKind};
use shroud::domain::{Document, Value};
use test_case::test_case;

fn doc(value: serde_json::Value) -> Document {
    Document::try_from(value).unwrap()
}

#[test_case("email", SyntheticKind::Email ; "email")]
#[test_case("emailaddress", SyntheticKind::Email ; "email wins over address")]
#[test_case("workemail", SyntheticKind::Email ; "email anywhere")]
#[test_case("firstname", SyntheticKind::FirstName ; "first name before name")]
#[test_case("userlastname", SyntheticKind::LastName ; "last name contains")]
#[test_case("description", SyntheticKind::Description ; "description exact")]
#[test_case("shortdescription", SyntheticKind::Word ; "description is exact only")]
#[test_case("homeaddress", SyntheticKind::StreetAddress ; "address suffix")]
#[test_case("addressline", SyntheticKind::Word ; "address prefix is not enough")]
#[test_case("city", SyntheticKind::City ; "city")]
#[test_case("country", SyntheticKind::Country ; "country")]
#[test_case("mobilephone", SyntheticKind::Phone ; "phone suffix")]
#[test_case("comment", SyntheticKind::Comment ; "comment")]
#[test_case("birthdate", SyntheticKind::PastDate ; "date suffix")]
#[test_case("username", SyntheticKind::FullName ; "name suffix")]
#[test_case("name", SyntheticKind::FullName ; "bare name")]
#[test_case("ssn", SyntheticKind::Word ; "fallback")]
fn test_heuristic_order(field: &str, expected: SyntheticKind) {
    assert_eq!(SyntheticKind::for_field(field), expected);
}

#[test]
fn test_generated_date_is_a_date_value() {
    assert!(matches!(generate_for_field("createddate"), Value::DateTime(_)));
}

#[test]
fn test_empty_document() {
    let masked = anonymize_batch(&[doc(json!({}))], "users", &["email"]).unwrap();
    assert!(masked[0].is_empty());
}

#[test]
fn test_empty_field_list_is_identity() {
    let original = doc(json!({"email": "a@b.c", "nested": {"name": "x"}}));
    let empty: [&str; 0] = [];

    let masked = anonymize_batch(&[original.clone()], "users", &empty).unwrap();

    assert_eq!(masked[0], original);
}

#[test]
fn test_case_insensitive_match_keeps_original_casing() {
    let masked = anonymize_batch(
        &[doc(json!({"EMAIL": "A@B.C", "Email": "c@d.e"}))],
        "users",
        &["email:x"],
    )
    .unwrap();

    assert_eq!(masked[0].keys().collect::<Vec<_>>(), vec!["EMAIL", "Email"]);
    assert_eq!(masked[0].get("EMAIL"), Some(&Value::from("x")));
    assert_eq!(masked[0].get("Email"), Some(&Value::from("x")));
}

#[test]
fn test_null_and_empty_array_are_resolved_as_scalars() {
    let masked = anonymize_batch(
        &[doc(json!({"phone": null, "tags": []}))],
        "users",
        &["phone:none", "tags:untagged"],
    )
    .unwrap();

    assert_eq!(masked[0].get("phone"), Some(&Value::from("none")));
    assert_eq!(masked[0].get("tags"), Some(&Value::from("untagged")));
}

#[test]
fn test_scalar_array_elements_resolved_individually() {
    let masked = anonymize_batch(
        &[doc(json!({"aliases": ["jd", "johnny", ["nested"]]}))],
        "users",
        &["aliases:hidden"],
    )
    .unwrap();

    assert_eq!(
        masked[0].get("aliases"),
        Some(&Value::Array(vec![
            Value::from("hidden"),
            Value::from("hidden"),
            Value::Array(vec![Value::from("hidden")]),
        ]))
    );
}

#[test]
fn test_empty_directive_uses_heuristic() {
    let masked = anonymize_batch(&[doc(json!({"email": "keep@me.com"}))], "users", &["email:"])
        .unwrap();

    let email = masked[0].get("email").and_then(Value::as_str).unwrap();
    assert_ne!(email, "keep@me.com");
    assert!(email.contains('@'));
}

#[test]
fn test_directive_keeps_text_after_first_colon() {
    let masked = anonymize_batch(
        &[doc(json!({"url": "https://internal"}))],
        "users",
        &["url:https://example.com:8080"],
    )
    .unwrap();

    assert_eq!(masked[0].get("url"), Some(&Value::from("https://example.com:8080")));
}

#[test]
fn test_field_named_like_collection() {
    let masked = anonymize_batch(
        &[doc(json!({"users": "alice", "other": 1}))],
        "users",
        &["users.users:gone"],
    )
    .unwrap();

    assert_eq!(masked[0].get("users"), Some(&Value::from("gone")));
    assert_eq!(masked[0].get("other"), Some(&Value::from(1i64)));
}

#[test]
fn test_first_rule_wins_for_duplicate_fields() {
    let masked = anonymize_batch(
        &[doc(json!({"email": "a@b.c"}))],
        "users",
        &["email:first", "users.email:second"],
    )
    .unwrap();

    assert_eq!(masked[0].get("email"), Some(&Value::from("first")));
}

#[test]
fn test_very_long_and_unicode_values() {
    let long = "ø".repeat(10_000);
    let masked = anonymize_batch(
        &[doc(json!({"comment": long, "titel": "Grüße 👋"}))],
        "users",
        &["comment:[]"],
    )
    .unwrap();

    assert_eq!(masked[0].get("comment"), Some(&Value::Array(vec![])));
    assert_eq!(masked[0].get("titel"), Some(&Value::from("Grüße 👋")));
}

#[test]
fn test_deeply_nested_matched_containers() {
    let mut value = json!({"secret": "bottom"});
    for _ in 0..50 {
        value = json!({"wrap": value});
    }

    let masked = anonymize_batch(&[doc(value)], "users", &["wrap", "secret:x"]).unwrap();

    let mut current = &masked[0];
    for _ in 0..50 {
        current = current.get("wrap").and_then(Value::as_document).unwrap();
    }
    assert_eq!(current.get("secret"), Some(&Value::from("x")));
}
