use crate::index::PolicyIndex;
use crate::model::{CountryPolicy, TravelerRecord, Visa, WatchlistEntry};
use std::collections::BTreeMap;
use time::macros::date;
use time::{Date, Duration};

pub const TODAY: Date = date!(2026 - 10 - 19);

pub const WATCHED_PASSPORT: &str = "ZZ4UF-6XD3R-H8F7M-J6XZJ-VDKCW";

/// Complete, well-formed, visiting from a country with no requirements.
pub fn clean_record() -> TravelerRecord {
    TravelerRecord {
        first_name: Some("Jane".to_string()),
        last_name: Some("Doe".to_string()),
        passport_number: Some("6P294-42HR2-95PSF-93NFF-2G8P1".to_string()),
        birth_date: Some("1952-12-04".to_string()),
        home_country: Some("KAN".to_string()),
        origin_country: Some("ALB".to_string()),
        transit_country: None,
        entry_reason: Some("visit".to_string()),
        visa: None,
    }
}

pub fn visa_days_before(days: i64) -> Visa {
    Visa {
        date: Some((TODAY - Duration::days(days)).to_string()),
        code: Some("CFR6X-XSMVA".to_string()),
    }
}

pub fn watch(first: &str, last: &str, passport: &str) -> WatchlistEntry {
    WatchlistEntry {
        first_name: first.to_string(),
        last_name: last.to_string(),
        passport_number: passport.to_string(),
    }
}

pub fn country(medical: bool, visitor: bool, transit: bool) -> CountryPolicy {
    CountryPolicy {
        has_medical_advisory: medical,
        requires_visitor_visa: visitor,
        requires_transit_visa: transit,
    }
}

/// ALB: nothing. LUG: medical advisory. BRD: both visas. KRA: transit visa. KAN: home.
pub fn sample_countries() -> BTreeMap<String, CountryPolicy> {
    let mut countries = BTreeMap::new();
    countries.insert("ALB".to_string(), country(false, false, false));
    countries.insert("LUG".to_string(), country(true, false, false));
    countries.insert("BRD".to_string(), country(false, true, true));
    countries.insert("KRA".to_string(), country(false, false, true));
    countries.insert("KAN".to_string(), country(false, false, false));
    countries
}

pub fn sample_watchlist() -> Vec<WatchlistEntry> {
    vec![
        watch("Bob", "Jones", WATCHED_PASSPORT),
        watch("Ann", "Smith", "QWERT-YUIOP-ASDFG-HJKLZ-XCVBN"),
    ]
}

pub fn sample_index() -> PolicyIndex {
    PolicyIndex::build(&sample_watchlist(), &sample_countries()).expect("sample index builds")
}
