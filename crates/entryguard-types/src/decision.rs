use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Final admission outcome for one traveler.
///
/// The serialized form is the only legal rendering: `Accept`, `Reject`,
/// `Secondary`, `Quarantine`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Decision {
    Accept,
    Reject,
    Secondary,
    Quarantine,
}

impl Decision {
    /// Every decision, highest priority first. The tagged decisions follow the
    /// declaration order of [`Tag`]; `Accept` is what an empty tag set yields.
    pub const ALL: [Decision; 4] = [
        Decision::Quarantine,
        Decision::Reject,
        Decision::Secondary,
        Decision::Accept,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Decision::Accept => "Accept",
            Decision::Reject => "Reject",
            Decision::Secondary => "Secondary",
            Decision::Quarantine => "Quarantine",
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome tag emitted by a rule. A record with no tags is accepted.
///
/// Variant order is the priority order: `Ord` puts the winning tag first, so
/// the smallest tag in a fired set decides the traveler.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    Quarantine,
    Reject,
    Secondary,
}

impl Tag {
    pub fn decision(self) -> Decision {
        match self {
            Tag::Quarantine => Decision::Quarantine,
            Tag::Reject => Decision::Reject,
            Tag::Secondary => Decision::Secondary,
        }
    }
}
