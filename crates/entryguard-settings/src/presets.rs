use entryguard_domain::policy::{DEFAULT_VISA_VALIDITY_DAYS, EvaluationPolicy, NameMatch};

/// Preset profiles are opinionated defaults.
///
/// `compat` reproduces the historical classifier exactly; `strict` tightens watchlist
/// name matching to a single entry.
pub fn preset(profile: &str) -> EvaluationPolicy {
    match profile {
        "strict" => strict_profile(),
        // default
        _ => compat_profile(),
    }
}

fn compat_profile() -> EvaluationPolicy {
    EvaluationPolicy {
        profile: "compat".to_string(),
        visa_validity_days: DEFAULT_VISA_VALIDITY_DAYS,
        name_match: NameMatch::AnyEntry,
        parallel: true,
    }
}

fn strict_profile() -> EvaluationPolicy {
    EvaluationPolicy {
        profile: "strict".to_string(),
        visa_validity_days: DEFAULT_VISA_VALIDITY_DAYS,
        name_match: NameMatch::SameEntry,
        parallel: true,
    }
}
