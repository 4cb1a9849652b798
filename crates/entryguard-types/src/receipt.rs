use crate::{Decision, Tag};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Stable schema identifier for entryguard reports.
pub const SCHEMA_REPORT_V1: &str = "entryguard.report.v1";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// Why a rule fired for a traveler.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Reason {
    pub rule_id: String,
    pub code: String,
    pub tag: Tag,
    pub message: String,
}

/// Decision for the traveler at `index` in the input sequence.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TravelerVerdict {
    pub index: u64,
    pub decision: Decision,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reasons: Vec<Reason>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DecisionCounts {
    pub accept: u64,
    pub reject: u64,
    pub secondary: u64,
    pub quarantine: u64,
}

impl DecisionCounts {
    pub fn from_decisions<I: IntoIterator<Item = Decision>>(decisions: I) -> Self {
        let mut counts = DecisionCounts::default();
        for d in decisions {
            match d {
                Decision::Accept => counts.accept += 1,
                Decision::Reject => counts.reject += 1,
                Decision::Secondary => counts.secondary += 1,
                Decision::Quarantine => counts.quarantine += 1,
            }
        }
        counts
    }

    pub fn total(&self) -> u64 {
        self.accept + self.reject + self.secondary + self.quarantine
    }
}

/// Entryguard-specific summary payload for the report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Default)]
pub struct AdmissionData {
    pub profile: String,
    /// Calendar date (`YYYY-MM-DD`) visa ages were measured against.
    pub evaluated_on: String,
    pub visa_validity_days: u32,
    pub name_match: String,

    pub records_evaluated: u64,
    pub watchlist_entries: u64,
    pub countries_indexed: u64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AdmissionReport {
    /// Versioned schema identifier for the envelope shape.
    pub schema: String,
    pub tool: ToolMeta,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,
    pub counts: DecisionCounts,
    /// One entry per input record, in input order.
    pub travelers: Vec<TravelerVerdict>,
    pub data: AdmissionData,
}

impl AdmissionReport {
    pub fn decisions(&self) -> impl Iterator<Item = Decision> + '_ {
        self.travelers.iter().map(|t| t.decision)
    }
}
