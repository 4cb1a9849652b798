//! Input adapters: read and parse the three JSON documents the engine consumes.
//!
//! This crate is allowed to do filesystem IO. It does not evaluate anything; the
//! country table is converted to typed policies and any structural gap is an error.

#![forbid(unsafe_code)]

mod parse;

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use entryguard_domain::model::{CountryPolicy, TravelerRecord, WatchlistEntry};
use std::collections::BTreeMap;

pub use parse::{parse_countries, parse_entries, parse_watchlist};

/// Fuzz-friendly API for testing parsing robustness without filesystem access.
/// These functions are designed to never panic on any input.
pub mod fuzz {
    use super::*;

    /// Parse arbitrary text as an entries document. **Never panics** on any input.
    pub fn parse_entries(text: &str) -> anyhow::Result<()> {
        let _ = parse::parse_entries(text)?;
        Ok(())
    }

    /// Parse arbitrary text as a watchlist document. **Never panics** on any input.
    pub fn parse_watchlist(text: &str) -> anyhow::Result<()> {
        let _ = parse::parse_watchlist(text)?;
        Ok(())
    }

    /// Parse arbitrary text as a countries document. **Never panics** on any input.
    pub fn parse_countries(text: &str) -> anyhow::Result<()> {
        let _ = parse::parse_countries(text)?;
        Ok(())
    }
}

/// Locations of the three input documents.
#[derive(Clone, Debug)]
pub struct InputPaths {
    pub entries: Utf8PathBuf,
    pub watchlist: Utf8PathBuf,
    pub countries: Utf8PathBuf,
}

/// Everything the engine needs, already parsed.
#[derive(Clone, Debug, Default)]
pub struct Inputs {
    pub records: Vec<TravelerRecord>,
    pub watchlist: Vec<WatchlistEntry>,
    pub countries: BTreeMap<String, CountryPolicy>,
}

pub fn load_inputs(paths: &InputPaths) -> anyhow::Result<Inputs> {
    let records = parse_entries(&read_text(&paths.entries)?)
        .with_context(|| format!("parse {}", paths.entries))?;
    let watchlist = parse_watchlist(&read_text(&paths.watchlist)?)
        .with_context(|| format!("parse {}", paths.watchlist))?;
    let countries = parse_countries(&read_text(&paths.countries)?)
        .with_context(|| format!("parse {}", paths.countries))?;

    Ok(Inputs {
        records,
        watchlist,
        countries,
    })
}

fn read_text(path: &Utf8Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("read {}", path))
}
