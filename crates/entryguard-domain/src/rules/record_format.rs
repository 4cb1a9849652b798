use super::reason;
use crate::model::TravelerRecord;
use crate::validate::ValidationResult;
use entryguard_types::{Reason, Tag, ids};

pub fn run(record: &TravelerRecord, validation: &ValidationResult, out: &mut Vec<Reason>) {
    if !validation.complete {
        out.push(reason(
            Tag::Reject,
            ids::RULE_RECORD_FORMAT,
            ids::CODE_INCOMPLETE_RECORD,
            format!(
                "record is missing required fields: {}",
                missing_fields(record).join(", ")
            ),
        ));
    }

    // Absent passport or birth date is already reported as incomplete.
    if let Some(passport) = record.passport_number.as_deref() {
        if !validation.passport_valid {
            out.push(reason(
                Tag::Reject,
                ids::RULE_RECORD_FORMAT,
                ids::CODE_INVALID_PASSPORT,
                format!(
                    "passport number '{passport}' is not five groups of five letters or digits"
                ),
            ));
        }
    }

    if let Some(birth_date) = record.birth_date.as_deref() {
        if !validation.birth_date_valid {
            out.push(reason(
                Tag::Reject,
                ids::RULE_RECORD_FORMAT,
                ids::CODE_INVALID_BIRTH_DATE,
                format!("birth date '{birth_date}' is not a YYYY-MM-DD calendar date"),
            ));
        }
    }

    if record.visa.is_some() && !validation.visa_date_valid {
        out.push(reason(
            Tag::Reject,
            ids::RULE_RECORD_FORMAT,
            ids::CODE_INVALID_VISA_DATE,
            match record.visa_date() {
                Some(date) => format!("visa date '{date}' is not a YYYY-MM-DD calendar date"),
                None => "visa has no date".to_string(),
            },
        ));
    }
}

fn missing_fields(record: &TravelerRecord) -> Vec<&'static str> {
    [
        ("first_name", record.first_name.is_none()),
        ("last_name", record.last_name.is_none()),
        ("from", record.origin_country.is_none()),
        ("entry_reason", record.entry_reason.is_none()),
        ("passport", record.passport_number.is_none()),
        ("birth_date", record.birth_date.is_none()),
        ("home", record.home_country.is_none()),
    ]
    .into_iter()
    .filter_map(|(name, missing)| missing.then_some(name))
    .collect()
}
