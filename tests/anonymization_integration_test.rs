//! Integration tests for the anonymization engine

use serde_json::json;
use shroud::anonymization::rules::{parse_rules, AnonymizationRule};
use shroud::anonymization::{anonymize_batch, Anonymizer};
use shroud::domain::{CollectionName, Document, Value};

fn doc(value: serde_json::Value) -> Document {
    Document::try_from(value).expect("test document must be an object")
}

fn users_rules() -> Vec<&'static str> {
    vec![
        "users.firstName",
        "users.lastName",
        "users.email:faker.internet.email",
    ]
}

#[test]
fn test_parse_users_rules() {
    let rules = parse_rules(&users_rules(), "users");

    assert_eq!(
        rules,
        vec![
            AnonymizationRule::new("firstname", None),
            AnonymizationRule::new("lastname", None),
            AnonymizationRule::new("email", Some("faker.internet.email".to_string())),
        ]
    );
}

#[test]
fn test_users_document_is_fully_masked() {
    let original = doc(json!({
        "firstName": "John",
        "lastName": "Doe",
        "email": "john.doe@example.com"
    }));

    let masked = anonymize_batch(&[original.clone()], "users", &users_rules()).unwrap();
    let masked = &masked[0];

    let keys: Vec<&str> = masked.keys().collect();
    assert_eq!(keys, vec!["firstName", "lastName", "email"]);

    for key in ["firstName", "lastName", "email"] {
        assert_ne!(masked.get(key), original.get(key), "{key} was not replaced");
    }

    let email = masked.get("email").and_then(Value::as_str).unwrap();
    assert!(email.contains('@'));
    assert_eq!(email, email.to_lowercase());
}

#[test]
fn test_rules_for_other_collection_do_not_apply() {
    let original = doc(json!({"firstName": "John", "email": "john@example.com"}));

    let masked = anonymize_batch(&[original.clone()], "orders", &users_rules()).unwrap();

    assert_eq!(masked[0], original);
}

#[test]
fn test_unqualified_entries_apply_everywhere() {
    let docs = vec![doc(json!({"phone": "555-0100", "sku": "A-1"}))];

    let masked = anonymize_batch(&docs, "orders", &["phone:redacted"]).unwrap();

    assert_eq!(masked[0].get("phone"), Some(&Value::from("redacted")));
    assert_eq!(masked[0].get("sku"), Some(&Value::from("A-1")));
}

#[test]
fn test_sentinel_directives() {
    let docs = vec![doc(json!({
        "tags": "vip",
        "meta": "x",
        "notes": "call after 5",
        "alias": "jd"
    }))];

    let masked = anonymize_batch(
        &docs,
        "users",
        &["tags:[]", "meta:{}", "notes:null", "alias:ANONYMOUS"],
    )
    .unwrap();

    assert_eq!(masked[0].get("tags"), Some(&Value::Array(vec![])));
    assert_eq!(masked[0].get("meta"), Some(&Value::Object(Document::new())));
    assert_eq!(masked[0].get("notes"), Some(&Value::Null));
    assert_eq!(masked[0].get("alias"), Some(&Value::from("ANONYMOUS")));
}

#[test]
fn test_url_encoded_structured_literal() {
    let docs = vec![doc(json!({"roles": "admin"}))];

    let masked = anonymize_batch(
        &docs,
        "users",
        &["roles:[%22viewer%22%2C%22guest%22]"],
    )
    .unwrap();

    assert_eq!(
        masked[0].get("roles"),
        Some(&Value::Array(vec![Value::from("viewer"), Value::from("guest")]))
    );
}

#[test]
fn test_plain_structured_literal_keeps_key_order() {
    let docs = vec![doc(json!({"profile": "secret"}))];

    let masked = anonymize_batch(&docs, "users", &[r#"profile:{"z":1,"a":2}"#]).unwrap();

    let Some(Value::Object(profile)) = masked[0].get("profile") else {
        panic!("profile should be an object");
    };
    assert_eq!(profile.keys().collect::<Vec<_>>(), vec!["z", "a"]);
}

#[test]
fn test_nested_matches_inside_matched_container() {
    let docs = vec![doc(json!({
        "contact": {
            "email": "a@b.c",
            "kind": "home",
            "contact": {"email": "deep@b.c"}
        },
        "profile": {"email": "untouched@b.c"}
    }))];

    let masked = anonymize_batch(&docs, "users", &["contact", "email:hidden"]).unwrap();

    let contact = masked[0].get("contact").and_then(Value::as_document).unwrap();
    assert_eq!(contact.get("email"), Some(&Value::from("hidden")));
    assert_eq!(contact.get("kind"), Some(&Value::from("home")));
    let inner = contact.get("contact").and_then(Value::as_document).unwrap();
    assert_eq!(inner.get("email"), Some(&Value::from("hidden")));

    // `profile` is not on the list, so nothing below it is visited
    let profile = masked[0].get("profile").and_then(Value::as_document).unwrap();
    assert_eq!(profile.get("email"), Some(&Value::from("untouched@b.c")));
}

#[test]
fn test_nested_field_behind_unlisted_container_is_kept() {
    let docs = vec![doc(json!({
        "Email": "ada@example.com",
        "profile": {"phone": "555-0100", "plan": "pro"},
    }))];

    let masked = anonymize_batch(&docs, "users", &["email", "users.phone:null"]).unwrap();

    assert_ne!(masked[0].get("Email"), Some(&Value::from("ada@example.com")));
    assert_eq!(masked[0].get("profile"), docs[0].get("profile"));
}

#[test]
fn test_matched_array_of_objects() {
    let docs = vec![doc(json!({
        "addresses": [
            {"city": "Oslo", "zip": "0150"},
            {"city": "Bergen", "zip": "5003"}
        ]
    }))];

    let masked = anonymize_batch(&docs, "users", &["addresses", "city:REDACTED"]).unwrap();

    let addresses = masked[0].get("addresses").and_then(Value::as_array).unwrap();
    assert_eq!(addresses.len(), 2);
    for (address, zip) in addresses.iter().zip(["0150", "5003"]) {
        let address = address.as_document().unwrap();
        assert_eq!(address.get("city"), Some(&Value::from("REDACTED")));
        assert_eq!(address.get("zip"), Some(&Value::from(zip)));
    }
}

#[test]
fn test_anonymizer_matches_free_function() {
    let anonymizer =
        Anonymizer::for_collection(CollectionName::new("users").unwrap(), &users_rules());
    let docs: Vec<Document> = (0..3i64)
        .map(|n| doc(json!({"id": n, "firstName": "x", "age": 40})))
        .collect();

    let masked = anonymizer.anonymize_batch(&docs).unwrap();

    assert_eq!(anonymizer.rules().len(), 3);
    assert_eq!(masked.len(), 3);
    for (n, document) in masked.iter().enumerate() {
        assert_eq!(document.get("id"), Some(&Value::from(n as i64)));
        assert_eq!(document.get("age"), Some(&Value::from(40i64)));
    }
}

#[test]
fn test_input_documents_are_not_mutated() {
    let original = doc(json!({"email": "keep@me.com", "nested": {"email": "also@me.com"}}));
    let docs = vec![original.clone()];

    let _ = anonymize_batch(&docs, "users", &["email", "nested"]).unwrap();

    assert_eq!(docs[0], original);
}

#[test]
fn test_masked_document_serializes_in_order() {
    let docs = vec![doc(json!({"b": 1, "email": "x@y.z", "a": 2}))];

    let masked = anonymize_batch(&docs, "users", &["email:masked"]).unwrap();
    let json = serde_json::to_string(&serde_json::Value::from(masked[0].clone())).unwrap();

    assert_eq!(json, r#"{"b":1,"email":"masked","a":2}"#);
}
