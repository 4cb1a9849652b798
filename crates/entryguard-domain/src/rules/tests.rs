use super::{TagSet, evaluate, is_visa_valid, run_all, visa_age_days};
use crate::engine::{EvalContext, classify};
use crate::model::{TravelerRecord, Visa};
use crate::policy::{EvaluationPolicy, NameMatch};
use crate::test_support::{
    TODAY, WATCHED_PASSPORT, clean_record, sample_index, visa_days_before,
};
use crate::validate::validate;
use entryguard_types::{Decision, Reason, Tag, ids};

fn tags_for(record: &TravelerRecord) -> TagSet {
    let index = sample_index();
    let policy = EvaluationPolicy::default();
    let ctx = EvalContext::new(&index, &policy, TODAY);
    evaluate(record, &validate(record), &ctx)
}

fn reasons_for(record: &TravelerRecord, policy: &EvaluationPolicy) -> Vec<Reason> {
    let index = sample_index();
    let ctx = EvalContext::new(&index, policy, TODAY);
    let mut out = Vec::new();
    run_all(record, &validate(record), &ctx, &mut out);
    out
}

fn codes(reasons: &[Reason]) -> Vec<&str> {
    reasons.iter().map(|r| r.code.as_str()).collect()
}

fn decision_for(record: &TravelerRecord) -> Decision {
    let index = sample_index();
    let policy = EvaluationPolicy::default();
    classify(record, &EvalContext::new(&index, &policy, TODAY)).decision
}

#[test]
fn clean_record_fires_nothing() {
    assert!(tags_for(&clean_record()).is_empty());
    assert_eq!(decision_for(&clean_record()), Decision::Accept);
}

#[test]
fn medical_advisory_on_origin_quarantines() {
    let mut record = clean_record();
    record.origin_country = Some("lug".to_string());
    assert_eq!(
        codes(&reasons_for(&record, &EvaluationPolicy::default())),
        vec![ids::CODE_ORIGIN_MEDICAL_ADVISORY]
    );
    assert_eq!(decision_for(&record), Decision::Quarantine);
}

#[test]
fn medical_advisory_on_transit_quarantines() {
    let mut record = clean_record();
    record.transit_country = Some("LUG".to_string());
    assert_eq!(
        codes(&reasons_for(&record, &EvaluationPolicy::default())),
        vec![ids::CODE_TRANSIT_MEDICAL_ADVISORY]
    );
    assert_eq!(decision_for(&record), Decision::Quarantine);
}

#[test]
fn quarantine_beats_reject_and_secondary() {
    let mut record = clean_record();
    record.origin_country = Some("LUG".to_string());
    record.birth_date = None;
    record.passport_number = Some(WATCHED_PASSPORT.to_string());
    let tags = tags_for(&record);
    assert_eq!(tags.len(), 3);
    assert_eq!(decision_for(&record), Decision::Quarantine);
}

#[test]
fn missing_passport_rejects() {
    let mut record = clean_record();
    record.passport_number = None;
    let reasons = reasons_for(&record, &EvaluationPolicy::default());
    assert_eq!(codes(&reasons), vec![ids::CODE_INCOMPLETE_RECORD]);
    assert!(reasons[0].message.contains("passport"));
    assert_eq!(decision_for(&record), Decision::Reject);
}

#[test]
fn missing_origin_still_runs_independent_rules() {
    let mut record = clean_record();
    record.origin_country = None;
    record.transit_country = Some("LUG".to_string());
    let tags = tags_for(&record);
    assert!(tags.contains(&Tag::Quarantine));
    assert!(tags.contains(&Tag::Reject));
}

#[test]
fn record_with_nothing_is_rejected_not_faulted() {
    let record = TravelerRecord::default();
    assert_eq!(
        codes(&reasons_for(&record, &EvaluationPolicy::default())),
        vec![ids::CODE_INCOMPLETE_RECORD]
    );
    assert_eq!(decision_for(&record), Decision::Reject);
}

#[test]
fn malformed_fields_each_reject() {
    let mut bad_passport = clean_record();
    bad_passport.passport_number = Some("6P294-42HR2-95PSF-93NFF".to_string());
    assert_eq!(
        codes(&reasons_for(&bad_passport, &EvaluationPolicy::default())),
        vec![ids::CODE_INVALID_PASSPORT]
    );

    let mut bad_birth = clean_record();
    bad_birth.birth_date = Some("1952-02-30".to_string());
    assert_eq!(
        codes(&reasons_for(&bad_birth, &EvaluationPolicy::default())),
        vec![ids::CODE_INVALID_BIRTH_DATE]
    );

    let mut bad_visa = clean_record();
    bad_visa.visa = Some(Visa {
        date: Some("2026/01/01".to_string()),
        code: None,
    });
    assert_eq!(
        codes(&reasons_for(&bad_visa, &EvaluationPolicy::default())),
        vec![ids::CODE_INVALID_VISA_DATE]
    );

    for record in [bad_passport, bad_birth, bad_visa] {
        assert_eq!(decision_for(&record), Decision::Reject);
    }
}

#[test]
fn visit_without_visa_to_visitor_visa_country_rejects() {
    let mut record = clean_record();
    record.origin_country = Some("BRD".to_string());
    record.entry_reason = Some("Visit".to_string());
    assert_eq!(
        codes(&reasons_for(&record, &EvaluationPolicy::default())),
        vec![ids::CODE_VISITOR_VISA_MISSING]
    );
    assert_eq!(decision_for(&record), Decision::Reject);
}

#[test]
fn visit_with_fresh_visa_is_accepted() {
    let mut record = clean_record();
    record.origin_country = Some("BRD".to_string());
    record.visa = Some(visa_days_before(10));
    assert_eq!(decision_for(&record), Decision::Accept);
}

#[test]
fn visit_to_transit_only_country_needs_no_visa() {
    let mut record = clean_record();
    record.origin_country = Some("KRA".to_string());
    assert_eq!(decision_for(&record), Decision::Accept);
}

#[test]
fn transit_with_expired_visa_rejects() {
    let mut record = clean_record();
    record.origin_country = Some("KRA".to_string());
    record.entry_reason = Some("TRANSIT".to_string());
    record.visa = Some(visa_days_before(800));
    let reasons = reasons_for(&record, &EvaluationPolicy::default());
    assert_eq!(codes(&reasons), vec![ids::CODE_TRANSIT_VISA_INVALID]);
    assert!(reasons[0].message.contains("800 days"));
    assert_eq!(decision_for(&record), Decision::Reject);
}

#[test]
fn transit_without_visa_rejects() {
    let mut record = clean_record();
    record.origin_country = Some("BRD".to_string());
    record.entry_reason = Some("transit".to_string());
    assert_eq!(
        codes(&reasons_for(&record, &EvaluationPolicy::default())),
        vec![ids::CODE_TRANSIT_VISA_MISSING]
    );
}

#[test]
fn other_entry_reasons_ignore_visa_requirements() {
    let mut record = clean_record();
    record.origin_country = Some("BRD".to_string());
    record.entry_reason = Some("returning".to_string());
    assert_eq!(decision_for(&record), Decision::Accept);
}

#[test]
fn malformed_visa_date_fires_format_and_visa_rules() {
    let mut record = clean_record();
    record.origin_country = Some("BRD".to_string());
    record.visa = Some(Visa {
        date: Some("yesterday".to_string()),
        code: None,
    });
    let reasons = reasons_for(&record, &EvaluationPolicy::default());
    assert_eq!(
        codes(&reasons),
        vec![ids::CODE_INVALID_VISA_DATE, ids::CODE_VISITOR_VISA_INVALID]
    );
}

#[test]
fn visa_boundary_is_exclusive() {
    let mut record = clean_record();
    record.visa = Some(visa_days_before(729));
    assert!(is_visa_valid(&record, TODAY, 730));

    record.visa = Some(visa_days_before(730));
    assert!(!is_visa_valid(&record, TODAY, 730));

    record.origin_country = Some("BRD".to_string());
    assert_eq!(decision_for(&record), Decision::Reject);
    record.visa = Some(visa_days_before(729));
    assert_eq!(decision_for(&record), Decision::Accept);
}

#[test]
fn future_dated_visa_is_valid() {
    assert_eq!(visa_age_days("2027-10-19", TODAY), Some(-365));
    let mut record = clean_record();
    record.visa = Some(visa_days_before(-30));
    assert!(is_visa_valid(&record, TODAY, 730));
}

#[test]
fn visa_window_follows_policy() {
    let mut record = clean_record();
    record.origin_country = Some("BRD".to_string());
    record.visa = Some(visa_days_before(100));

    let short = EvaluationPolicy {
        visa_validity_days: 90,
        ..EvaluationPolicy::default()
    };
    assert_eq!(
        codes(&reasons_for(&record, &short)),
        vec![ids::CODE_VISITOR_VISA_INVALID]
    );
    assert!(reasons_for(&record, &EvaluationPolicy::default()).is_empty());
}

#[test]
fn watchlisted_passport_any_case_is_secondary() {
    let mut record = clean_record();
    record.passport_number = Some(WATCHED_PASSPORT.to_lowercase());
    assert_eq!(
        codes(&reasons_for(&record, &EvaluationPolicy::default())),
        vec![ids::CODE_WATCHLIST_PASSPORT]
    );
    assert_eq!(decision_for(&record), Decision::Secondary);
}

#[test]
fn watchlisted_name_is_secondary() {
    let mut record = clean_record();
    record.first_name = Some("BOB".to_string());
    record.last_name = Some("jones".to_string());
    assert_eq!(decision_for(&record), Decision::Secondary);
}

#[test]
fn reject_beats_secondary() {
    let mut record = clean_record();
    record.passport_number = Some(WATCHED_PASSPORT.to_string());
    record.home_country = None;
    assert_eq!(decision_for(&record), Decision::Reject);
}

#[test]
fn name_matching_crosses_entries_by_default() {
    // "Bob" belongs to one watchlist entry and "Smith" to another.
    let mut record = clean_record();
    record.first_name = Some("Bob".to_string());
    record.last_name = Some("Smith".to_string());

    assert_eq!(
        codes(&reasons_for(&record, &EvaluationPolicy::default())),
        vec![ids::CODE_WATCHLIST_NAME]
    );

    let same_entry = EvaluationPolicy {
        name_match: NameMatch::SameEntry,
        ..EvaluationPolicy::default()
    };
    assert!(reasons_for(&record, &same_entry).is_empty());
}

#[test]
fn only_first_name_on_watchlist_is_not_a_match() {
    let mut record = clean_record();
    record.first_name = Some("Bob".to_string());
    record.last_name = None;
    let tags = tags_for(&record);
    assert!(!tags.contains(&Tag::Secondary));
}
