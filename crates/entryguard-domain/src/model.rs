/// One traveler arriving at the border, as supplied by the loader.
///
/// Every field is optional: an absent field is a checkable state, not an error.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TravelerRecord {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub passport_number: Option<String>,
    /// `YYYY-MM-DD`, unvalidated.
    pub birth_date: Option<String>,
    pub home_country: Option<String>,

    /// Country the traveler is arriving from.
    pub origin_country: Option<String>,
    /// Country the traveler passed through on the way, if any.
    pub transit_country: Option<String>,

    /// Free text; `visit` and `transit` (any case) carry visa requirements.
    pub entry_reason: Option<String>,
    pub visa: Option<Visa>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Visa {
    /// Issue date, `YYYY-MM-DD`, unvalidated.
    pub date: Option<String>,
    pub code: Option<String>,
}

impl TravelerRecord {
    /// Case-insensitive comparison of the entry reason; `false` when absent.
    pub fn entry_reason_is(&self, reason: &str) -> bool {
        self.entry_reason
            .as_deref()
            .map(|r| r.to_lowercase() == reason)
            .unwrap_or(false)
    }

    pub fn visa_date(&self) -> Option<&str> {
        self.visa.as_ref().and_then(|v| v.date.as_deref())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WatchlistEntry {
    pub first_name: String,
    pub last_name: String,
    pub passport_number: String,
}

/// Per-country admission flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CountryPolicy {
    pub has_medical_advisory: bool,
    pub requires_visitor_visa: bool,
    pub requires_transit_visa: bool,
}
