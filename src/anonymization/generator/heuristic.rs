//! Field-name heuristics for fields listed without a directive
//!
//! The checks run in a fixed order and the first hit wins. Several predicates
//! overlap (`emailaddress` is both an email and an address; `firstname` also
//! ends with `name`), so the order below is observable behaviour.

use super::catalog;
use crate::domain::Value;

/// The kind of synthetic value picked for a field name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntheticKind {
    Email,
    FirstName,
    LastName,
    Description,
    StreetAddress,
    City,
    Country,
    Phone,
    Comment,
    PastDate,
    FullName,
    Word,
}

impl SyntheticKind {
    /// Picks the kind for a lowercase field name
    pub fn for_field(field_name: &str) -> Self {
        if field_name.contains("email") {
            Self::Email
        } else if field_name.contains("firstname") {
            Self::FirstName
        } else if field_name.contains("lastname") {
            Self::LastName
        } else if field_name == "description" {
            Self::Description
        } else if field_name.ends_with("address") {
            Self::StreetAddress
        } else if field_name.ends_with("city") {
            Self::City
        } else if field_name.ends_with("country") {
            Self::Country
        } else if field_name.ends_with("phone") {
            Self::Phone
        } else if field_name.ends_with("comment") {
            Self::Comment
        } else if field_name.ends_with("date") {
            Self::PastDate
        } else if field_name.ends_with("name") {
            Self::FullName
        } else {
            Self::Word
        }
    }

    /// Produces a fresh value of this kind
    pub fn generate(self) -> Value {
        match self {
            Self::Email => catalog::internet_email(),
            Self::FirstName => catalog::person_first_name(),
            Self::LastName => catalog::person_last_name(),
            Self::Description | Self::Comment => catalog::lorem_sentence(),
            Self::StreetAddress => catalog::location_street_address(),
            Self::City => catalog::location_city(),
            Self::Country => catalog::location_country(),
            Self::Phone => catalog::phone_number(),
            Self::PastDate => catalog::date_past(),
            Self::FullName => catalog::person_full_name(),
            Self::Word => catalog::word_sample(),
        }
    }
}

/// Generates a synthetic value for a lowercase field name
pub fn generate_for_field(field_name: &str) -> Value {
    SyntheticKind::for_field(field_name).generate()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("email", SyntheticKind::Email)]
    #[test_case("emailaddress", SyntheticKind::Email; "email wins over address")]
    #[test_case("workemailcomment", SyntheticKind::Email; "email is a substring match")]
    #[test_case("firstname", SyntheticKind::FirstName)]
    #[test_case("userfirstnamecopy", SyntheticKind::FirstName; "firstname is a substring match")]
    #[test_case("lastname", SyntheticKind::LastName)]
    #[test_case("description", SyntheticKind::Description)]
    #[test_case("shortdescription", SyntheticKind::Word; "description must be exact")]
    #[test_case("address", SyntheticKind::StreetAddress)]
    #[test_case("billingaddress", SyntheticKind::StreetAddress)]
    #[test_case("addressline", SyntheticKind::Word; "address must be a suffix")]
    #[test_case("city", SyntheticKind::City)]
    #[test_case("homecountry", SyntheticKind::Country)]
    #[test_case("mobilephone", SyntheticKind::Phone)]
    #[test_case("phonenumber", SyntheticKind::Word; "phone must be a suffix")]
    #[test_case("comment", SyntheticKind::Comment)]
    #[test_case("birthdate", SyntheticKind::PastDate)]
    #[test_case("updatedate", SyntheticKind::PastDate)]
    #[test_case("name", SyntheticKind::FullName)]
    #[test_case("username", SyntheticKind::FullName)]
    #[test_case("nickname", SyntheticKind::FullName)]
    #[test_case("ssn", SyntheticKind::Word)]
    #[test_case("unrecognizedkey", SyntheticKind::Word)]
    fn test_kind_for_field(field: &str, expected: SyntheticKind) {
        assert_eq!(SyntheticKind::for_field(field), expected);
    }

    #[test]
    fn test_heuristic_email_is_lowercase() {
        let value = generate_for_field("email");
        let email = value.as_str().unwrap();
        assert!(email.contains('@'));
        assert_eq!(email, email.to_lowercase());
    }

    #[test]
    fn test_heuristic_date_is_datetime() {
        assert!(matches!(generate_for_field("birthdate"), Value::DateTime(_)));
    }

    #[test]
    fn test_heuristic_default_is_non_empty_word() {
        let value = generate_for_field("unrecognizedkey");
        assert!(!value.as_str().unwrap().is_empty());
    }
}
