//! Built-in synthetic value generators
//!
//! Each generator is a zero-argument function so it can sit in the registry
//! as a plain `fn() -> Value`.

use crate::domain::Value;
use chrono::{DateTime, Duration, Utc};
use fake::faker::address::en::{
    BuildingNumber, CityName, CountryCode, CountryName, SecondaryAddress, StateAbbr, StateName,
    StreetName, TimeZone, ZipCode,
};
use fake::faker::company::en::{Buzzword, CompanyName, Industry, Profession};
use fake::faker::internet::en::{
    DomainSuffix, IPv4, IPv6, MACAddress, Password, SafeEmail, UserAgent, Username,
};
use fake::faker::lorem::en::{Paragraph, Sentence, Word, Words};
use fake::faker::name::en::{FirstName, LastName, Name, Suffix, Title};
use fake::faker::phone_number::en::{CellNumber, PhoneNumber};
use fake::Fake;
use rand::distributions::Alphanumeric;
use rand::Rng;

const SECONDS_PER_DAY: i64 = 86_400;
const SECONDS_PER_YEAR: i64 = 365 * SECONDS_PER_DAY;

/// A timestamp `offset` seconds away from now, with `offset` drawn from `range`
fn shifted_now(range: std::ops::RangeInclusive<i64>) -> DateTime<Utc> {
    let offset = rand::thread_rng().gen_range(range);
    Utc::now() + Duration::seconds(offset)
}

fn word_list(words: Vec<String>) -> Value {
    Value::Array(words.into_iter().map(Value::String).collect())
}

// person

pub fn person_first_name() -> Value {
    Value::String(FirstName().fake())
}

pub fn person_last_name() -> Value {
    Value::String(LastName().fake())
}

pub fn person_full_name() -> Value {
    Value::String(Name().fake())
}

pub fn person_prefix() -> Value {
    Value::String(Title().fake())
}

pub fn person_suffix() -> Value {
    Value::String(Suffix().fake())
}

// internet

/// Email addresses are always lowercased
pub fn internet_email() -> Value {
    let email: String = SafeEmail().fake();
    Value::String(email.to_lowercase())
}

pub fn internet_user_name() -> Value {
    Value::String(Username().fake())
}

pub fn internet_password() -> Value {
    Value::String(Password(12..20).fake())
}

pub fn internet_ipv4() -> Value {
    Value::String(IPv4().fake())
}

pub fn internet_ipv6() -> Value {
    Value::String(IPv6().fake())
}

pub fn internet_mac() -> Value {
    Value::String(MACAddress().fake())
}

pub fn internet_user_agent() -> Value {
    Value::String(UserAgent().fake())
}

pub fn internet_domain_suffix() -> Value {
    Value::String(DomainSuffix().fake())
}

fn domain_name() -> String {
    let word: String = Word().fake();
    let suffix: String = DomainSuffix().fake();
    format!("{}.{}", word.to_lowercase(), suffix)
}

pub fn internet_domain_name() -> Value {
    Value::String(domain_name())
}

pub fn internet_url() -> Value {
    Value::String(format!("https://{}", domain_name()))
}

// location

pub fn location_street_address() -> Value {
    let number: String = BuildingNumber().fake();
    let street: String = StreetName().fake();
    Value::String(format!("{number} {street}"))
}

pub fn location_street() -> Value {
    Value::String(StreetName().fake())
}

pub fn location_building_number() -> Value {
    Value::String(BuildingNumber().fake())
}

pub fn location_city() -> Value {
    Value::String(CityName().fake())
}

pub fn location_country() -> Value {
    Value::String(CountryName().fake())
}

pub fn location_country_code() -> Value {
    Value::String(CountryCode().fake())
}

pub fn location_zip_code() -> Value {
    Value::String(ZipCode().fake())
}

pub fn location_state() -> Value {
    Value::String(StateName().fake())
}

pub fn location_state_abbr() -> Value {
    Value::String(StateAbbr().fake())
}

pub fn location_secondary_address() -> Value {
    Value::String(SecondaryAddress().fake())
}

pub fn location_time_zone() -> Value {
    Value::String(TimeZone().fake())
}

// phone

pub fn phone_number() -> Value {
    Value::String(PhoneNumber().fake())
}

pub fn phone_cell_number() -> Value {
    Value::String(CellNumber().fake())
}

// lorem and word

pub fn lorem_word() -> Value {
    Value::String(Word().fake())
}

pub fn lorem_words() -> Value {
    word_list(Words(3..6).fake())
}

pub fn lorem_sentence() -> Value {
    Value::String(Sentence(4..10).fake())
}

pub fn lorem_paragraph() -> Value {
    Value::String(Paragraph(3..6).fake())
}

pub fn word_sample() -> Value {
    lorem_word()
}

pub fn word_words() -> Value {
    let words: Vec<String> = Words(2..5).fake();
    Value::String(words.join(" "))
}

// company

pub fn company_name() -> Value {
    Value::String(CompanyName().fake())
}

pub fn company_buzzword() -> Value {
    Value::String(Buzzword().fake())
}

pub fn company_industry() -> Value {
    Value::String(Industry().fake())
}

pub fn company_profession() -> Value {
    Value::String(Profession().fake())
}

// date

/// Within the last year
pub fn date_past() -> Value {
    Value::DateTime(shifted_now(-SECONDS_PER_YEAR..=-1))
}

/// Within the last day
pub fn date_recent() -> Value {
    Value::DateTime(shifted_now(-SECONDS_PER_DAY..=-1))
}

/// Within the next year
pub fn date_future() -> Value {
    Value::DateTime(shifted_now(1..=SECONDS_PER_YEAR))
}

/// Within the next day
pub fn date_soon() -> Value {
    Value::DateTime(shifted_now(1..=SECONDS_PER_DAY))
}

/// Between 18 and 80 years ago
pub fn date_birthdate() -> Value {
    Value::DateTime(shifted_now(-80 * SECONDS_PER_YEAR..=-18 * SECONDS_PER_YEAR))
}

// string and number

pub fn string_uuid() -> Value {
    Value::String(uuid::Uuid::new_v4().to_string())
}

pub fn string_alphanumeric() -> Value {
    let text: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(10)
        .map(char::from)
        .collect();
    Value::String(text)
}

pub fn string_numeric() -> Value {
    let mut rng = rand::thread_rng();
    let digits: String = (0..10)
        .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
        .collect();
    Value::String(digits)
}

pub fn number_int() -> Value {
    Value::from(rand::thread_rng().gen_range(0..=99_999i64))
}

pub fn number_float() -> Value {
    let raw: f64 = rand::thread_rng().gen_range(0.0..1000.0);
    let rounded = (raw * 100.0).round() / 100.0;
    serde_json::Number::from_f64(rounded)
        .map(Value::Number)
        .unwrap_or(Value::Null)
}
