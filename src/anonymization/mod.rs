//! Anonymization engine
//!
//! Decides which fields of a document get rewritten and with what.
//!
//! # Architecture
//!
//! - **Rules** ([`rules`]): parses the field list (`[collection.]field[:directive]`)
//!   into the rules that apply to one collection
//! - **Directives** ([`directive`]): classifies a directive as a generator
//!   selector, sentinel, structured literal or plain literal
//! - **Generators** ([`generator`]): the `faker.<category>.<method>` registry
//!   and the field-name heuristic used when no directive is given
//! - **Resolver** ([`resolver`]): turns a directive into a value
//! - **Transformer** ([`transformer`]): walks a document and rebuilds it with
//!   matched fields replaced
//! - **Engine** ([`engine`]): the batch entry point used by the copy pipeline
//!
//! # Usage
//!
//! ```rust
//! use shroud::anonymization::Anonymizer;
//! use shroud::domain::{CollectionName, Document, Value};
//! use serde_json::json;
//!
//! let anonymizer = Anonymizer::for_collection(
//!     CollectionName::new("users").unwrap(),
//!     &["users.email:faker.internet.email", "notes:null"],
//! );
//!
//! let doc = Document::try_from(json!({"email": "a@b.c", "notes": "private"})).unwrap();
//! let masked = anonymizer.anonymize_document(&doc).unwrap();
//! assert_eq!(masked.get("notes"), Some(&Value::Null));
//! ```

pub mod config;
pub mod directive;
pub mod engine;
pub mod generator;
pub mod resolver;
pub mod rules;
pub mod transformer;

// Re-export main types
pub use config::AnonymizationConfig;
pub use directive::Directive;
pub use engine::{anonymize_batch, check_field_list, Anonymizer};
pub use generator::GeneratorRegistry;
pub use rules::{parse_rules, AnonymizationRule, RuleSet};
