use thiserror::Error;

/// Reference data that violates the loader contract.
///
/// These are never turned into decisions: a malformed policy table means no
/// traveler can be classified correctly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolicyError {
    #[error("country policy has a blank country code")]
    BlankCountryCode,
    #[error("country code {code} appears more than once with conflicting policies")]
    ConflictingCountry { code: String },
    #[error("country {country} is missing the {field} predicate")]
    MissingPredicate { country: String, field: &'static str },
    #[error("country {country} has an unrecognized {field} value: {value}")]
    InvalidPredicate {
        country: String,
        field: &'static str,
        value: String,
    },
}
