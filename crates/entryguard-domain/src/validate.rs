//! Structural completeness and field-format checks for one record.

use crate::model::TravelerRecord;
use time::Date;
use time::macros::format_description;

/// Format facts about a record. Never an error: rules compose these booleans.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ValidationResult {
    /// All seven required fields are present.
    pub complete: bool,
    pub passport_valid: bool,
    pub birth_date_valid: bool,
    /// `true` when no visa is present.
    pub visa_date_valid: bool,
}

pub fn validate(record: &TravelerRecord) -> ValidationResult {
    let complete = record.first_name.is_some()
        && record.last_name.is_some()
        && record.origin_country.is_some()
        && record.entry_reason.is_some()
        && record.passport_number.is_some()
        && record.birth_date.is_some()
        && record.home_country.is_some();

    let visa_date_valid = match &record.visa {
        None => true,
        Some(visa) => visa.date.as_deref().is_some_and(is_valid_date),
    };

    ValidationResult {
        complete,
        passport_valid: record
            .passport_number
            .as_deref()
            .is_some_and(is_valid_passport),
        birth_date_valid: record.birth_date.as_deref().is_some_and(is_valid_date),
        visa_date_valid,
    }
}

/// Five groups of five ASCII letters or digits joined by four dashes.
pub fn is_valid_passport(passport: &str) -> bool {
    let groups: Vec<&str> = passport.split('-').collect();
    groups.len() == 5
        && groups
            .iter()
            .all(|g| g.len() == 5 && g.bytes().all(|b| b.is_ascii_alphanumeric()))
}

pub fn is_valid_date(s: &str) -> bool {
    parse_calendar_date(s).is_some()
}

/// Parse a strict `YYYY-MM-DD` calendar date.
///
/// Exactly four year digits, two month digits and two day digits; the date must exist
/// (no February 30th) and the year must be at least 1.
pub fn parse_calendar_date(s: &str) -> Option<Date> {
    let b = s.as_bytes();
    let shape_ok = b.len() == 10
        && b[4] == b'-'
        && b[7] == b'-'
        && b.iter()
            .enumerate()
            .all(|(i, c)| i == 4 || i == 7 || c.is_ascii_digit());
    if !shape_ok {
        return None;
    }

    let date = Date::parse(s, format_description!("[year]-[month]-[day]")).ok()?;
    (date.year() >= 1).then_some(date)
}
