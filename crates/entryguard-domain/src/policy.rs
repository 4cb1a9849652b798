/// How a traveler's first and last name are matched against the watchlist.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NameMatch {
    /// First name among all watchlist first names AND last name among all watchlist
    /// last names. The two may come from different entries.
    #[default]
    AnyEntry,
    /// A single watchlist entry must carry both names.
    SameEntry,
}

impl NameMatch {
    pub fn as_str(self) -> &'static str {
        match self {
            NameMatch::AnyEntry => "any_entry",
            NameMatch::SameEntry => "same_entry",
        }
    }
}

pub const DEFAULT_VISA_VALIDITY_DAYS: u32 = 730;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvaluationPolicy {
    pub profile: String,
    /// A visa is valid while its age in whole days is strictly below this.
    pub visa_validity_days: u32,
    pub name_match: NameMatch,
    /// Classify records on the rayon pool. Output order is the same either way.
    pub parallel: bool,
}

impl Default for EvaluationPolicy {
    fn default() -> Self {
        Self {
            profile: "compat".to_string(),
            visa_validity_days: DEFAULT_VISA_VALIDITY_DAYS,
            name_match: NameMatch::AnyEntry,
            parallel: true,
        }
    }
}
