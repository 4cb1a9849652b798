use crate::engine::EvalContext;
use crate::model::TravelerRecord;
use crate::validate::ValidationResult;
use entryguard_types::{Reason, Tag};
use std::collections::BTreeSet;

mod medical_advisory;
mod record_format;
mod visa;
mod watchlist;

#[cfg(test)]
mod tests;

pub use visa::{is_visa_valid, visa_age_days};

/// Outcome tags fired for one record. Empty means Accept.
pub type TagSet = BTreeSet<Tag>;

/// Run every rule family. Families never short-circuit each other.
pub fn run_all(
    record: &TravelerRecord,
    validation: &ValidationResult,
    ctx: &EvalContext<'_>,
    out: &mut Vec<Reason>,
) {
    medical_advisory::run(record, ctx, out);
    record_format::run(record, validation, out);
    visa::run_visitor(record, ctx, out);
    visa::run_transit(record, ctx, out);
    watchlist::run(record, ctx, out);
}

pub fn evaluate(
    record: &TravelerRecord,
    validation: &ValidationResult,
    ctx: &EvalContext<'_>,
) -> TagSet {
    let mut reasons = Vec::new();
    run_all(record, validation, ctx, &mut reasons);
    tags_of(&reasons)
}

pub fn tags_of(reasons: &[Reason]) -> TagSet {
    reasons.iter().map(|r| r.tag).collect()
}

fn reason(tag: Tag, rule_id: &str, code: &str, message: String) -> Reason {
    Reason {
        rule_id: rule_id.to_string(),
        code: code.to_string(),
        tag,
        message,
    }
}
