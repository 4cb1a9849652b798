use crate::{model::EntryguardConfigV1, presets};
use anyhow::Context;
use entryguard_domain::policy::{EvaluationPolicy, NameMatch};

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub profile: Option<String>,
    pub visa_validity_days: Option<u32>,
    pub parallel: Option<bool>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub effective: EvaluationPolicy,
}

pub fn resolve_config(
    cfg: EntryguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let profile = overrides
        .profile
        .clone()
        .or(cfg.profile.clone())
        .unwrap_or_else(|| "compat".to_string());

    let mut effective = presets::preset(&profile);

    if let Some(days) = overrides.visa_validity_days.or(cfg.visa_validity_days) {
        if days == 0 {
            anyhow::bail!("visa_validity_days must be at least 1");
        }
        effective.visa_validity_days = days;
    }

    if let Some(nm) = cfg.name_match.as_deref() {
        effective.name_match = parse_name_match(nm).context("invalid name_match")?;
    }

    if let Some(parallel) = overrides.parallel.or(cfg.parallel) {
        effective.parallel = parallel;
    }

    Ok(ResolvedConfig { effective })
}

fn parse_name_match(v: &str) -> anyhow::Result<NameMatch> {
    match v {
        "any_entry" => Ok(NameMatch::AnyEntry),
        "same_entry" => Ok(NameMatch::SameEntry),
        other => anyhow::bail!("unknown name_match: {other} (expected any_entry|same_entry)"),
    }
}
