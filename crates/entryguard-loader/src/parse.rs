//! JSON documents -> domain models.
//!
//! The raw shapes mirror the files border agents already produce; nothing here
//! validates business rules, that is the engine's job.

use anyhow::Context;
use entryguard_domain::PolicyError;
use entryguard_domain::model::{CountryPolicy, TravelerRecord, Visa, WatchlistEntry};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

#[derive(Debug, Deserialize)]
struct RawEntry {
    first_name: Option<String>,
    last_name: Option<String>,
    passport: Option<String>,
    birth_date: Option<String>,
    home: Option<RawLocation>,
    from: Option<RawLocation>,
    via: Option<RawLocation>,
    entry_reason: Option<String>,
    visa: Option<RawVisa>,
}

/// Either `{"city": .., "region": .., "country": ..}` or a bare country code.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawLocation {
    Code(String),
    Place { country: Option<String> },
}

impl RawLocation {
    /// A location without a country is still present; it just matches no policy.
    fn into_country(self) -> String {
        match self {
            RawLocation::Code(code) => code,
            RawLocation::Place { country } => country.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawVisa {
    date: Option<String>,
    code: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawWatchlistEntry {
    first_name: String,
    last_name: String,
    passport: String,
}

#[derive(Debug, Deserialize)]
struct RawCountry {
    medical_advisory: Option<Value>,
    visitor_visa_required: Option<Value>,
    transit_visa_required: Option<Value>,
}

impl From<RawEntry> for TravelerRecord {
    fn from(raw: RawEntry) -> Self {
        TravelerRecord {
            first_name: raw.first_name,
            last_name: raw.last_name,
            passport_number: raw.passport,
            birth_date: raw.birth_date,
            home_country: raw.home.map(RawLocation::into_country),
            origin_country: raw.from.map(RawLocation::into_country),
            transit_country: raw.via.map(RawLocation::into_country),
            entry_reason: raw.entry_reason,
            visa: raw.visa.map(|v| Visa {
                date: v.date,
                code: v.code,
            }),
        }
    }
}

/// Parse the traveler entries array. Errors name the offending record.
pub fn parse_entries(text: &str) -> anyhow::Result<Vec<TravelerRecord>> {
    let values: Vec<Value> = serde_json::from_str(text).context("entries must be a JSON array")?;
    values
        .into_iter()
        .enumerate()
        .map(|(i, v)| {
            let raw: RawEntry =
                serde_json::from_value(v).with_context(|| format!("entry #{i} is malformed"))?;
            Ok(TravelerRecord::from(raw))
        })
        .collect()
}

pub fn parse_watchlist(text: &str) -> anyhow::Result<Vec<WatchlistEntry>> {
    let raw: Vec<RawWatchlistEntry> =
        serde_json::from_str(text).context("watchlist must be an array of entries")?;
    Ok(raw
        .into_iter()
        .map(|w| WatchlistEntry {
            first_name: w.first_name,
            last_name: w.last_name,
            passport_number: w.passport,
        })
        .collect())
}

pub fn parse_countries(text: &str) -> anyhow::Result<BTreeMap<String, CountryPolicy>> {
    let raw: BTreeMap<String, RawCountry> =
        serde_json::from_str(text).context("countries must be an object keyed by country code")?;

    let mut out = BTreeMap::new();
    for (code, c) in raw {
        let policy = CountryPolicy {
            has_medical_advisory: advisory_flag(&code, c.medical_advisory)?,
            requires_visitor_visa: visa_flag(
                &code,
                "visitor_visa_required",
                c.visitor_visa_required,
            )?,
            requires_transit_visa: visa_flag(
                &code,
                "transit_visa_required",
                c.transit_visa_required,
            )?,
        };
        out.insert(code, policy);
    }
    Ok(out)
}

/// `medical_advisory` holds the advisory text; any non-empty text is an advisory.
fn advisory_flag(country: &str, value: Option<Value>) -> Result<bool, PolicyError> {
    const FIELD: &str = "medical_advisory";
    match value {
        None | Some(Value::Null) => Err(PolicyError::MissingPredicate {
            country: country.to_string(),
            field: FIELD,
        }),
        Some(Value::String(s)) => Ok(!s.is_empty()),
        Some(Value::Bool(b)) => Ok(b),
        Some(other) => Err(invalid(country, FIELD, &other)),
    }
}

/// Visa flags are `"1"`/`"0"` in the published tables; numbers and booleans are accepted too.
fn visa_flag(
    country: &str,
    field: &'static str,
    value: Option<Value>,
) -> Result<bool, PolicyError> {
    match value {
        None | Some(Value::Null) => Err(PolicyError::MissingPredicate {
            country: country.to_string(),
            field,
        }),
        Some(Value::String(s)) => match s.as_str() {
            "1" => Ok(true),
            "0" | "" => Ok(false),
            _ => Err(invalid(country, field, &Value::String(s.clone()))),
        },
        Some(Value::Number(n)) => match n.as_u64() {
            Some(1) => Ok(true),
            Some(0) => Ok(false),
            _ => Err(invalid(country, field, &Value::Number(n))),
        },
        Some(Value::Bool(b)) => Ok(b),
        Some(other) => Err(invalid(country, field, &other)),
    }
}

fn invalid(country: &str, field: &'static str, value: &Value) -> PolicyError {
    PolicyError::InvalidPredicate {
        country: country.to_string(),
        field,
        value: value.to_string(),
    }
}
