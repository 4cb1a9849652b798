//! Fuzz target for record classification.
//!
//! Goal: every record, however malformed, gets exactly one decision and
//! classification **never panics**.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_classify
//! ```

#![no_main]

use arbitrary::Arbitrary;
use entryguard_domain::model::{CountryPolicy, TravelerRecord, Visa, WatchlistEntry};
use entryguard_domain::policy::EvaluationPolicy;
use entryguard_domain::{PolicyIndex, decide};
use libfuzzer_sys::fuzz_target;
use std::collections::BTreeMap;

#[derive(Debug, Arbitrary)]
struct FuzzRecord {
    first_name: Option<String>,
    last_name: Option<String>,
    passport_number: Option<String>,
    birth_date: Option<String>,
    home_country: Option<String>,
    origin_country: Option<String>,
    transit_country: Option<String>,
    entry_reason: Option<String>,
    visa: Option<Option<String>>,
}

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    records: Vec<FuzzRecord>,
    watchlist: Vec<(String, String, String)>,
    countries: Vec<(String, bool, bool, bool)>,
    visa_validity_days: u16,
    days_since_epoch: u16,
}

fuzz_target!(|input: FuzzInput| {
    let watchlist: Vec<WatchlistEntry> = input
        .watchlist
        .into_iter()
        .map(|(first_name, last_name, passport_number)| WatchlistEntry {
            first_name,
            last_name,
            passport_number,
        })
        .collect();

    let countries: BTreeMap<String, CountryPolicy> = input
        .countries
        .into_iter()
        .map(|(code, medical, visitor, transit)| {
            (
                code,
                CountryPolicy {
                    has_medical_advisory: medical,
                    requires_visitor_visa: visitor,
                    requires_transit_visa: transit,
                },
            )
        })
        .collect();

    // Blank or conflicting codes are precondition failures, not panics.
    let Ok(index) = PolicyIndex::build(&watchlist, &countries) else {
        return;
    };

    let records: Vec<TravelerRecord> = input
        .records
        .into_iter()
        .map(|r| TravelerRecord {
            first_name: r.first_name,
            last_name: r.last_name,
            passport_number: r.passport_number,
            birth_date: r.birth_date,
            home_country: r.home_country,
            origin_country: r.origin_country,
            transit_country: r.transit_country,
            entry_reason: r.entry_reason,
            visa: r.visa.map(|date| Visa { date, code: None }),
        })
        .collect();

    let policy = EvaluationPolicy {
        visa_validity_days: u32::from(input.visa_validity_days).max(1),
        ..EvaluationPolicy::default()
    };
    let today = time::Date::from_julian_day(2_440_588 + i32::from(input.days_since_epoch))
        .unwrap_or(time::Date::MIN);

    let decisions = decide(&records, &index, &policy, today);
    assert_eq!(decisions.len(), records.len());
});
