//! Read-only lookup structures over the watchlist and country policy table.
//!
//! Everything is lowercased at build time; queries lowercase their argument once.

use crate::error::PolicyError;
use crate::model::{CountryPolicy, WatchlistEntry};
use std::collections::{BTreeMap, HashMap, HashSet};

#[derive(Clone, Debug, Default)]
pub struct PolicyIndex {
    first_names: HashSet<String>,
    last_names: HashSet<String>,
    passports: HashSet<String>,
    name_pairs: HashSet<(String, String)>,
    countries: HashMap<String, CountryPolicy>,
    watchlist_len: usize,
}

impl PolicyIndex {
    pub fn build(
        watchlist: &[WatchlistEntry],
        countries: &BTreeMap<String, CountryPolicy>,
    ) -> Result<Self, PolicyError> {
        let mut index = PolicyIndex {
            watchlist_len: watchlist.len(),
            ..PolicyIndex::default()
        };

        for entry in watchlist {
            let first = entry.first_name.to_lowercase();
            let last = entry.last_name.to_lowercase();
            index.first_names.insert(first.clone());
            index.last_names.insert(last.clone());
            index.name_pairs.insert((first, last));
            index
                .passports
                .insert(entry.passport_number.to_lowercase());
        }

        for (code, policy) in countries {
            if code.trim().is_empty() {
                return Err(PolicyError::BlankCountryCode);
            }
            let key = code.to_lowercase();
            match index.countries.get(&key) {
                Some(existing) if existing != policy => {
                    return Err(PolicyError::ConflictingCountry { code: key });
                }
                Some(_) => {}
                None => {
                    index.countries.insert(key, *policy);
                }
            }
        }

        Ok(index)
    }

    /// True when `first` is any watchlist first name and `last` is any watchlist last
    /// name, independently. This is [`NameMatch::AnyEntry`](crate::policy::NameMatch).
    pub fn is_on_watchlist_by_name(&self, first: &str, last: &str) -> bool {
        self.first_names.contains(&first.to_lowercase())
            && self.last_names.contains(&last.to_lowercase())
    }

    /// True when one watchlist entry carries both names.
    pub fn is_on_watchlist_by_name_pair(&self, first: &str, last: &str) -> bool {
        self.name_pairs
            .contains(&(first.to_lowercase(), last.to_lowercase()))
    }

    pub fn is_on_watchlist_by_passport(&self, passport: &str) -> bool {
        self.passports.contains(&passport.to_lowercase())
    }

    pub fn country(&self, code: &str) -> Option<&CountryPolicy> {
        self.countries.get(&code.to_lowercase())
    }

    pub fn has_medical_advisory(&self, code: &str) -> bool {
        self.country(code)
            .map(|c| c.has_medical_advisory)
            .unwrap_or(false)
    }

    pub fn requires_visitor_visa(&self, code: &str) -> bool {
        self.country(code)
            .map(|c| c.requires_visitor_visa)
            .unwrap_or(false)
    }

    pub fn requires_transit_visa(&self, code: &str) -> bool {
        self.country(code)
            .map(|c| c.requires_transit_visa)
            .unwrap_or(false)
    }

    pub fn watchlist_len(&self) -> usize {
        self.watchlist_len
    }

    pub fn countries_len(&self) -> usize {
        self.countries.len()
    }
}
