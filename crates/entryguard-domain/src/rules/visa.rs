use super::reason;
use crate::engine::EvalContext;
use crate::model::TravelerRecord;
use crate::validate::parse_calendar_date;
use entryguard_types::{Reason, Tag, ids};
use time::Date;

struct VisaRule {
    entry_reason: &'static str,
    rule_id: &'static str,
    code_missing: &'static str,
    code_invalid: &'static str,
    label: &'static str,
}

const VISITOR: VisaRule = VisaRule {
    entry_reason: "visit",
    rule_id: ids::RULE_VISITOR_VISA,
    code_missing: ids::CODE_VISITOR_VISA_MISSING,
    code_invalid: ids::CODE_VISITOR_VISA_INVALID,
    label: "visitor",
};

const TRANSIT: VisaRule = VisaRule {
    entry_reason: "transit",
    rule_id: ids::RULE_TRANSIT_VISA,
    code_missing: ids::CODE_TRANSIT_VISA_MISSING,
    code_invalid: ids::CODE_TRANSIT_VISA_INVALID,
    label: "transit",
};

pub fn run_visitor(record: &TravelerRecord, ctx: &EvalContext<'_>, out: &mut Vec<Reason>) {
    let Some(origin) = record.origin_country.as_deref() else {
        return;
    };
    if ctx.index.requires_visitor_visa(origin) {
        run(&VISITOR, origin, record, ctx, out);
    }
}

pub fn run_transit(record: &TravelerRecord, ctx: &EvalContext<'_>, out: &mut Vec<Reason>) {
    let Some(origin) = record.origin_country.as_deref() else {
        return;
    };
    if ctx.index.requires_transit_visa(origin) {
        run(&TRANSIT, origin, record, ctx, out);
    }
}

fn run(
    rule: &VisaRule,
    origin: &str,
    record: &TravelerRecord,
    ctx: &EvalContext<'_>,
    out: &mut Vec<Reason>,
) {
    if !record.entry_reason_is(rule.entry_reason) {
        return;
    }

    if record.visa.is_none() {
        out.push(reason(
            Tag::Reject,
            rule.rule_id,
            rule.code_missing,
            format!("{origin} requires a {} visa and none was presented", rule.label),
        ));
        return;
    }

    let window = ctx.policy.visa_validity_days;
    if is_visa_valid(record, ctx.today, window) {
        return;
    }

    let detail = match record.visa_date().and_then(|d| visa_age_days(d, ctx.today)) {
        Some(age) => format!("issued {age} days before {}, limit is {window}", ctx.today),
        None => "its date is not a YYYY-MM-DD calendar date".to_string(),
    };
    out.push(reason(
        Tag::Reject,
        rule.rule_id,
        rule.code_invalid,
        format!(
            "{origin} requires a {} visa and the visa presented is not valid: {detail}",
            rule.label
        ),
    ));
}

/// Whole days from the visa date to `today`. Negative for visas dated in the future.
pub fn visa_age_days(visa_date: &str, today: Date) -> Option<i64> {
    parse_calendar_date(visa_date).map(|issued| (today - issued).whole_days())
}

/// A visa is valid when its date parses and its age is strictly below `window_days`.
pub fn is_visa_valid(record: &TravelerRecord, today: Date, window_days: u32) -> bool {
    record
        .visa_date()
        .and_then(|d| visa_age_days(d, today))
        .is_some_and(|age| age < i64::from(window_days))
}
