//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - priority resolution of fired tags
//! - order preservation and determinism of batch classification
//! - passport and visa-age boundaries

use crate::engine::{EvalContext, classify, classify_all, decide};
use crate::index::PolicyIndex;
use crate::model::{TravelerRecord, Visa};
use crate::policy::{EvaluationPolicy, NameMatch};
use crate::rules::{evaluate, is_visa_valid, tags_of};
use crate::test_support::{TODAY, sample_index, visa_days_before, watch};
use crate::validate::{is_valid_passport, validate};
use entryguard_types::{Decision, Tag};
use proptest::prelude::*;
use std::collections::BTreeMap;

// ============================================================================
// Strategies for generating arbitrary values
// ============================================================================

fn arb_name() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Bob".to_string()),
        Just("jones".to_string()),
        Just("Ann".to_string()),
        Just("SMITH".to_string()),
        "[A-Z][a-z]{1,8}",
    ]
}

fn arb_passport() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("ZZ4UF-6XD3R-H8F7M-J6XZJ-VDKCW".to_string()),
        Just("zz4uf-6xd3r-h8f7m-j6xzj-vdkcw".to_string()),
        "[A-Z0-9]{5}-[A-Z0-9]{5}-[A-Z0-9]{5}-[A-Z0-9]{5}-[A-Z0-9]{5}",
        "[A-Z0-9-]{0,30}",
    ]
}

fn arb_date() -> impl Strategy<Value = String> {
    prop_oneof![
        (1900i32..2030, 1u8..=12, 1u8..=28).prop_map(|(y, m, d)| format!("{y:04}-{m:02}-{d:02}")),
        (0i64..2000).prop_map(|days| visa_days_before(days).date.unwrap_or_default()),
        "[0-9/-]{0,12}",
    ]
}

fn arb_country() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("ALB".to_string()),
        Just("lug".to_string()),
        Just("BRD".to_string()),
        Just("kra".to_string()),
        Just("KAN".to_string()),
        "[A-Z]{3}",
    ]
}

fn arb_reason() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("visit".to_string()),
        Just("TRANSIT".to_string()),
        Just("returning".to_string()),
        "[a-z]{0,8}",
    ]
}

fn arb_record() -> impl Strategy<Value = TravelerRecord> {
    (
        (
            prop::option::of(arb_name()),
            prop::option::of(arb_name()),
            prop::option::of(arb_passport()),
            prop::option::of(arb_date()),
        ),
        (
            prop::option::of(arb_country()),
            prop::option::of(arb_country()),
            prop::option::of(arb_country()),
            prop::option::of(arb_reason()),
            prop::option::of(prop::option::of(arb_date())),
        ),
    )
        .prop_map(
            |((first, last, passport, birth), (home, origin, via, reason, visa))| TravelerRecord {
                first_name: first,
                last_name: last,
                passport_number: passport,
                birth_date: birth,
                home_country: home,
                origin_country: origin,
                transit_country: via,
                entry_reason: reason,
                visa: visa.map(|date| Visa { date, code: None }),
            },
        )
}

fn arb_policy() -> impl Strategy<Value = EvaluationPolicy> {
    (
        1u32..1500,
        prop_oneof![Just(NameMatch::AnyEntry), Just(NameMatch::SameEntry)],
        any::<bool>(),
    )
        .prop_map(|(days, name_match, parallel)| EvaluationPolicy {
            profile: "prop".to_string(),
            visa_validity_days: days,
            name_match,
            parallel,
        })
}

fn expected_decision(tags: &[Tag]) -> Decision {
    tags.iter()
        .map(|t| t.decision())
        .min_by_key(|d| Decision::ALL.iter().position(|p| p == d))
        .unwrap_or(Decision::Accept)
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn decision_is_highest_priority_fired_tag(record in arb_record(), policy in arb_policy()) {
        let index = sample_index();
        let ctx = EvalContext::new(&index, &policy, TODAY);

        let c = classify(&record, &ctx);
        let tags: Vec<Tag> = tags_of(&c.reasons).into_iter().collect();
        prop_assert_eq!(c.decision, expected_decision(&tags));
        prop_assert_eq!(c.decision == Decision::Accept, tags.is_empty());
    }

    #[test]
    fn evaluate_agrees_with_classify(record in arb_record()) {
        let index = sample_index();
        let policy = EvaluationPolicy::default();
        let ctx = EvalContext::new(&index, &policy, TODAY);

        let tags = evaluate(&record, &validate(&record), &ctx);
        let c = classify(&record, &ctx);
        prop_assert_eq!(tags, tags_of(&c.reasons));
    }

    #[test]
    fn batch_preserves_length_and_order(records in prop::collection::vec(arb_record(), 0..64)) {
        let index = sample_index();
        let parallel = EvaluationPolicy::default();
        let sequential = EvaluationPolicy { parallel: false, ..EvaluationPolicy::default() };

        let par = classify_all(&records, &EvalContext::new(&index, &parallel, TODAY));
        let seq = classify_all(&records, &EvalContext::new(&index, &sequential, TODAY));
        prop_assert_eq!(par.len(), records.len());
        prop_assert_eq!(&par, &seq);

        let ctx = EvalContext::new(&index, &parallel, TODAY);
        for (record, c) in records.iter().zip(&par) {
            prop_assert_eq!(&classify(record, &ctx), c);
        }
    }

    #[test]
    fn classification_is_idempotent(records in prop::collection::vec(arb_record(), 0..16)) {
        let index = sample_index();
        let policy = EvaluationPolicy::default();
        let first = decide(&records, &index, &policy, TODAY);
        let second = decide(&records, &index, &policy, TODAY);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn well_formed_passports_are_valid(groups in prop::collection::vec("[A-Za-z0-9]{5}", 5)) {
        prop_assert!(is_valid_passport(&groups.join("-")));
    }

    #[test]
    fn wrong_group_count_is_invalid(groups in prop::collection::vec("[A-Za-z0-9]{5}", 0..10)) {
        prop_assume!(groups.len() != 5);
        prop_assert!(!is_valid_passport(&groups.join("-")));
    }

    #[test]
    fn wrong_group_length_is_invalid(
        groups in prop::collection::vec("[A-Za-z0-9]{5}", 5),
        at in 0usize..5,
        extra in "[A-Za-z0-9]",
    ) {
        let mut groups = groups;
        groups[at].push_str(&extra);
        prop_assert!(!is_valid_passport(&groups.join("-")));
    }

    #[test]
    fn visa_validity_is_strictly_below_window(age in -400i64..2000, window in 1u32..1500) {
        let record = TravelerRecord {
            visa: Some(visa_days_before(age)),
            ..TravelerRecord::default()
        };
        prop_assert_eq!(is_visa_valid(&record, TODAY, window), age < i64::from(window));
    }

    #[test]
    fn same_entry_match_implies_any_entry_match(
        entries in prop::collection::vec((arb_name(), arb_name()), 0..6),
        first in arb_name(),
        last in arb_name(),
    ) {
        let watchlist: Vec<_> = entries
            .iter()
            .map(|(f, l)| watch(f, l, "AAAAA-AAAAA-AAAAA-AAAAA-AAAAA"))
            .collect();
        let index = PolicyIndex::build(&watchlist, &BTreeMap::new()).expect("build index");
        if index.is_on_watchlist_by_name_pair(&first, &last) {
            prop_assert!(index.is_on_watchlist_by_name(&first, &last));
        }
    }
}
