use super::reason;
use crate::engine::EvalContext;
use crate::model::TravelerRecord;
use entryguard_types::{Reason, Tag, ids};

pub fn run(record: &TravelerRecord, ctx: &EvalContext<'_>, out: &mut Vec<Reason>) {
    if let Some(origin) = record.origin_country.as_deref() {
        if ctx.index.has_medical_advisory(origin) {
            out.push(reason(
                Tag::Quarantine,
                ids::RULE_MEDICAL_ADVISORY,
                ids::CODE_ORIGIN_MEDICAL_ADVISORY,
                format!("traveler arrives from {origin}, which has a medical advisory"),
            ));
        }
    }

    if let Some(via) = record.transit_country.as_deref() {
        if ctx.index.has_medical_advisory(via) {
            out.push(reason(
                Tag::Quarantine,
                ids::RULE_MEDICAL_ADVISORY,
                ids::CODE_TRANSIT_MEDICAL_ADVISORY,
                format!("traveler transited through {via}, which has a medical advisory"),
            ));
        }
    }
}
