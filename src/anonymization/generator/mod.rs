//! Synthetic value generation
//!
//! Two entry points:
//! - [`generate_explicit`] resolves a `faker.<category>.<method>` selector
//!   through the [`GeneratorRegistry`]
//! - [`generate_for_field`] picks a generator from the field name when the
//!   field list gives no directive
//!
//! The registry maps `(category, method)` pairs to zero-argument functions.
//! It is built once per process and never mutated afterwards.

pub mod catalog;
pub mod heuristic;

pub use heuristic::{generate_for_field, SyntheticKind};

use crate::anonymization::directive::GENERATOR_PREFIX;
use crate::domain::{AnonymizationError, Value};
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// A registered generator
pub type GeneratorFn = fn() -> Value;

/// Lookup table from `(category, method)` to generator
#[derive(Debug, Default)]
pub struct GeneratorRegistry {
    categories: BTreeMap<&'static str, BTreeMap<&'static str, GeneratorFn>>,
}

impl GeneratorRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a generator, replacing any previous one with the same key
    pub fn register(&mut self, category: &'static str, method: &'static str, generator: GeneratorFn) {
        self.categories
            .entry(category)
            .or_default()
            .insert(method, generator);
    }

    /// Registry with every built-in generator
    pub fn builtin() -> Self {
        let mut registry = Self::new();

        registry.register("person", "firstName", catalog::person_first_name);
        registry.register("person", "lastName", catalog::person_last_name);
        registry.register("person", "fullName", catalog::person_full_name);
        registry.register("person", "prefix", catalog::person_prefix);
        registry.register("person", "suffix", catalog::person_suffix);

        registry.register("internet", "email", catalog::internet_email);
        registry.register("internet", "userName", catalog::internet_user_name);
        registry.register("internet", "password", catalog::internet_password);
        registry.register("internet", "ipv4", catalog::internet_ipv4);
        registry.register("internet", "ipv6", catalog::internet_ipv6);
        registry.register("internet", "mac", catalog::internet_mac);
        registry.register("internet", "userAgent", catalog::internet_user_agent);
        registry.register("internet", "domainSuffix", catalog::internet_domain_suffix);
        registry.register("internet", "domainName", catalog::internet_domain_name);
        registry.register("internet", "url", catalog::internet_url);

        registry.register("location", "streetAddress", catalog::location_street_address);
        registry.register("location", "street", catalog::location_street);
        registry.register("location", "buildingNumber", catalog::location_building_number);
        registry.register("location", "city", catalog::location_city);
        registry.register("location", "country", catalog::location_country);
        registry.register("location", "countryCode", catalog::location_country_code);
        registry.register("location", "zipCode", catalog::location_zip_code);
        registry.register("location", "state", catalog::location_state);
        registry.register("location", "stateAbbr", catalog::location_state_abbr);
        registry.register("location", "secondaryAddress", catalog::location_secondary_address);
        registry.register("location", "timeZone", catalog::location_time_zone);

        registry.register("phone", "number", catalog::phone_number);
        registry.register("phone", "cellNumber", catalog::phone_cell_number);

        registry.register("lorem", "word", catalog::lorem_word);
        registry.register("lorem", "words", catalog::lorem_words);
        registry.register("lorem", "sentence", catalog::lorem_sentence);
        registry.register("lorem", "paragraph", catalog::lorem_paragraph);

        registry.register("word", "sample", catalog::word_sample);
        registry.register("word", "words", catalog::word_words);

        registry.register("company", "name", catalog::company_name);
        registry.register("company", "buzzword", catalog::company_buzzword);
        registry.register("company", "industry", catalog::company_industry);
        registry.register("company", "profession", catalog::company_profession);

        registry.register("date", "past", catalog::date_past);
        registry.register("date", "recent", catalog::date_recent);
        registry.register("date", "future", catalog::date_future);
        registry.register("date", "soon", catalog::date_soon);
        registry.register("date", "birthdate", catalog::date_birthdate);

        registry.register("string", "uuid", catalog::string_uuid);
        registry.register("string", "alphanumeric", catalog::string_alphanumeric);
        registry.register("string", "numeric", catalog::string_numeric);

        registry.register("number", "int", catalog::number_int);
        registry.register("number", "float", catalog::number_float);

        registry
    }

    /// The process-wide built-in registry
    pub fn global() -> &'static GeneratorRegistry {
        static REGISTRY: OnceLock<GeneratorRegistry> = OnceLock::new();
        REGISTRY.get_or_init(GeneratorRegistry::builtin)
    }

    /// Finds the generator for a category and method
    ///
    /// # Errors
    ///
    /// [`AnonymizationError::Category`] if the category is unknown,
    /// [`AnonymizationError::Method`] if the category has no such method.
    pub fn lookup(&self, category: &str, method: &str) -> Result<GeneratorFn, AnonymizationError> {
        let methods = self
            .categories
            .get(category)
            .ok_or_else(|| AnonymizationError::Category {
                category: category.to_string(),
            })?;

        methods
            .get(method)
            .copied()
            .ok_or_else(|| AnonymizationError::Method {
                method: method.to_string(),
                category: category.to_string(),
            })
    }

    /// Resolves a full `faker.<category>.<method>` selector to its generator
    ///
    /// # Errors
    ///
    /// [`AnonymizationError::Format`] unless the selector has exactly three
    /// dot-separated segments and the first one is `faker`, then the
    /// [`lookup`](Self::lookup) errors.
    pub fn resolve(&self, directive: &str) -> Result<GeneratorFn, AnonymizationError> {
        let parts: Vec<&str> = directive.split('.').collect();
        match parts.as_slice() {
            [GENERATOR_PREFIX, category, method] => self.lookup(category, method),
            _ => Err(AnonymizationError::Format {
                directive: directive.to_string(),
            }),
        }
    }

    /// Resolves a selector and invokes its generator
    pub fn generate(&self, directive: &str) -> Result<Value, AnonymizationError> {
        self.resolve(directive).map(|generator| generator())
    }

    /// Registered category names, sorted
    pub fn categories(&self) -> impl Iterator<Item = &str> + '_ {
        self.categories.keys().copied()
    }

    /// Registered method names of a category, sorted
    pub fn methods(&self, category: &str) -> Option<impl Iterator<Item = &str> + '_> {
        self.categories
            .get(category)
            .map(|methods| methods.keys().copied())
    }
}

/// Generates a value for a `faker.<category>.<method>` selector using the
/// built-in registry
///
/// # Examples
///
/// ```
/// use shroud::anonymization::generator::generate_explicit;
///
/// let email = generate_explicit("faker.internet.email").unwrap();
/// assert!(email.as_str().unwrap().contains('@'));
///
/// let err = generate_explicit("faker.internet").unwrap_err();
/// assert!(err.to_string().contains("Expected format 'faker.category.method'"));
/// ```
pub fn generate_explicit(directive: &str) -> Result<Value, AnonymizationError> {
    GeneratorRegistry::global().generate(directive)
}
