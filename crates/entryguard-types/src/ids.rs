//! Stable identifiers for admission rules and reason codes.
//!
//! `rule_id` is a dotted namespace. `code` is a short snake_case discriminator.

// Rules
pub const RULE_MEDICAL_ADVISORY: &str = "admission.medical_advisory";
pub const RULE_RECORD_FORMAT: &str = "admission.record_format";
pub const RULE_VISITOR_VISA: &str = "admission.visitor_visa";
pub const RULE_TRANSIT_VISA: &str = "admission.transit_visa";
pub const RULE_WATCHLIST: &str = "admission.watchlist";

// Codes: admission.medical_advisory
pub const CODE_ORIGIN_MEDICAL_ADVISORY: &str = "origin_medical_advisory";
pub const CODE_TRANSIT_MEDICAL_ADVISORY: &str = "transit_medical_advisory";

// Codes: admission.record_format
pub const CODE_INCOMPLETE_RECORD: &str = "incomplete_record";
pub const CODE_INVALID_PASSPORT: &str = "invalid_passport";
pub const CODE_INVALID_BIRTH_DATE: &str = "invalid_birth_date";
pub const CODE_INVALID_VISA_DATE: &str = "invalid_visa_date";

// Codes: admission.visitor_visa
pub const CODE_VISITOR_VISA_MISSING: &str = "visitor_visa_missing";
pub const CODE_VISITOR_VISA_INVALID: &str = "visitor_visa_invalid";

// Codes: admission.transit_visa
pub const CODE_TRANSIT_VISA_MISSING: &str = "transit_visa_missing";
pub const CODE_TRANSIT_VISA_INVALID: &str = "transit_visa_invalid";

// Codes: admission.watchlist
pub const CODE_WATCHLIST_NAME: &str = "watchlist_name";
pub const CODE_WATCHLIST_PASSPORT: &str = "watchlist_passport";
