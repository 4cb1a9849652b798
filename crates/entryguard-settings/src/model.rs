use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// `entryguard.toml` schema v1.
///
/// Every key is optional; anything left out comes from the selected profile.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct EntryguardConfigV1 {
    /// Optional schema string for tooling (`entryguard.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// `compat` (default) or `strict`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,

    /// Visas at least this many days old are expired.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visa_validity_days: Option<u32>,

    /// `any_entry` or `same_entry`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_match: Option<String>,

    /// Classify records on a thread pool.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parallel: Option<bool>,
}
