//! Replacement directive classification

/// Prefix of generator selectors (`faker.<category>.<method>`)
pub const GENERATOR_PREFIX: &str = "faker";

/// The shape of a replacement directive
///
/// Directives stay plain strings in the rules; they are classified only when
/// a value is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive<'a> {
    /// `faker.<category>.<method>` (shape checked by the generator)
    Generator(&'a str),
    /// `[]`
    EmptyArray,
    /// `{}`
    EmptyObject,
    /// `null`
    Null,
    /// URL-encoded JSON starting with `[` or `{`
    StructuredLiteral(&'a str),
    /// Anything else, used verbatim
    Literal(&'a str),
}

impl<'a> Directive<'a> {
    /// Classifies a raw directive string
    ///
    /// # Examples
    ///
    /// ```
    /// use shroud::anonymization::directive::Directive;
    ///
    /// assert_eq!(Directive::classify("[]"), Directive::EmptyArray);
    /// assert_eq!(Directive::classify("%5B1%5D"), Directive::Literal("%5B1%5D"));
    /// assert_eq!(Directive::classify("[1,2]"), Directive::StructuredLiteral("[1,2]"));
    /// ```
    pub fn classify(raw: &'a str) -> Self {
        if raw.starts_with(GENERATOR_PREFIX) {
            return Directive::Generator(raw);
        }

        match raw {
            "[]" => Directive::EmptyArray,
            "{}" => Directive::EmptyObject,
            "null" => Directive::Null,
            _ if raw.starts_with('[') || raw.starts_with('{') => Directive::StructuredLiteral(raw),
            _ => Directive::Literal(raw),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("faker.internet.email", Directive::Generator("faker.internet.email"); "generator")]
    #[test_case("faker", Directive::Generator("faker"); "bare generator prefix")]
    #[test_case("fakery", Directive::Generator("fakery"); "prefix match only")]
    #[test_case("[]", Directive::EmptyArray; "empty array")]
    #[test_case("{}", Directive::EmptyObject; "empty object")]
    #[test_case("null", Directive::Null; "null")]
    #[test_case("NULL", Directive::Literal("NULL"); "null is case sensitive")]
    #[test_case("{\"a\":1}", Directive::StructuredLiteral("{\"a\":1}"); "object literal")]
    #[test_case("[invalid-json", Directive::StructuredLiteral("[invalid-json"); "broken literal")]
    #[test_case("REDACTED", Directive::Literal("REDACTED"); "plain literal")]
    #[test_case("", Directive::Literal(""); "empty literal")]
    fn test_classify(raw: &str, expected: Directive<'_>) {
        assert_eq!(Directive::classify(raw), expected);
    }
}
