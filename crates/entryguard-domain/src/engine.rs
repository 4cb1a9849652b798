use crate::index::PolicyIndex;
use crate::model::TravelerRecord;
use crate::policy::EvaluationPolicy;
use crate::report::DomainReport;
use crate::resolve::resolve;
use crate::rules::{self, tags_of};
use crate::validate::validate;
use entryguard_types::{Decision, DecisionCounts, Reason, TravelerVerdict};
use rayon::prelude::*;
use time::Date;

/// Everything a rule may consult besides the record itself.
#[derive(Clone, Copy, Debug)]
pub struct EvalContext<'a> {
    pub index: &'a PolicyIndex,
    pub policy: &'a EvaluationPolicy,
    /// Visa ages are measured against this date.
    pub today: Date,
}

impl<'a> EvalContext<'a> {
    pub fn new(index: &'a PolicyIndex, policy: &'a EvaluationPolicy, today: Date) -> Self {
        Self {
            index,
            policy,
            today,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Classification {
    pub decision: Decision,
    /// Sorted by tag priority, then rule id, then code.
    pub reasons: Vec<Reason>,
}

/// validate -> evaluate -> resolve for one record.
pub fn classify(record: &TravelerRecord, ctx: &EvalContext<'_>) -> Classification {
    let validation = validate(record);

    let mut reasons = Vec::new();
    rules::run_all(record, &validation, ctx, &mut reasons);
    reasons.sort_by(|a, b| {
        a.tag
            .cmp(&b.tag)
            .then(a.rule_id.cmp(&b.rule_id))
            .then(a.code.cmp(&b.code))
    });

    let decision = resolve(&tags_of(&reasons));
    Classification { decision, reasons }
}

/// Classify every record. The result is index-aligned with `records`.
pub fn classify_all(records: &[TravelerRecord], ctx: &EvalContext<'_>) -> Vec<Classification> {
    if ctx.policy.parallel {
        // Indexed parallel iterators collect in input order.
        records.par_iter().map(|r| classify(r, ctx)).collect()
    } else {
        records.iter().map(|r| classify(r, ctx)).collect()
    }
}

/// Decisions only, in input order.
pub fn decide(
    records: &[TravelerRecord],
    index: &PolicyIndex,
    policy: &EvaluationPolicy,
    today: Date,
) -> Vec<Decision> {
    let ctx = EvalContext::new(index, policy, today);
    classify_all(records, &ctx)
        .into_iter()
        .map(|c| c.decision)
        .collect()
}

pub fn evaluate_batch(records: &[TravelerRecord], ctx: &EvalContext<'_>) -> DomainReport {
    let travelers: Vec<TravelerVerdict> = (0u64..)
        .zip(classify_all(records, ctx))
        .map(|(i, c)| TravelerVerdict {
            index: i,
            decision: c.decision,
            reasons: c.reasons,
        })
        .collect();

    let counts = DecisionCounts::from_decisions(travelers.iter().map(|t| t.decision));

    DomainReport { travelers, counts }
}
