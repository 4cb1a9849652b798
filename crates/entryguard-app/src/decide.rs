//! The `decide` use case: load inputs, classify every traveler, produce a report.

use anyhow::Context;
use entryguard_domain::policy::EvaluationPolicy;
use entryguard_domain::{Clock, EvalContext, PolicyIndex, evaluate_batch};
use entryguard_loader::{InputPaths, Inputs};
use entryguard_settings::{Overrides, ResolvedConfig};
use entryguard_types::{AdmissionData, AdmissionReport, SCHEMA_REPORT_V1, ToolMeta};
use time::{Date, OffsetDateTime};

/// Input for the decide use case.
#[derive(Clone, Copy)]
pub struct DecideInput<'a> {
    /// Where the entries, watchlist and countries documents live.
    pub paths: &'a InputPaths,
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: &'a Overrides,
    /// Supplies the date visa ages are measured against.
    pub clock: &'a dyn Clock,
}

/// Output from the decide use case.
#[derive(Clone, Debug)]
pub struct DecideOutput {
    pub report: AdmissionReport,
    /// The resolved configuration used.
    pub resolved_config: ResolvedConfig,
}

/// Run the decide use case: parse config, load inputs, build the index, classify, report.
pub fn run_decide(input: DecideInput<'_>) -> anyhow::Result<DecideOutput> {
    // Parse config (empty is allowed, defaults apply).
    let cfg = if input.config_text.trim().is_empty() {
        entryguard_settings::EntryguardConfigV1::default()
    } else {
        entryguard_settings::parse_config_toml(input.config_text).context("parse config")?
    };

    let resolved = entryguard_settings::resolve_config(cfg, input.overrides.clone())
        .context("resolve config")?;

    let inputs = entryguard_loader::load_inputs(input.paths).context("load inputs")?;
    tracing::info!(
        records = inputs.records.len(),
        watchlist = inputs.watchlist.len(),
        countries = inputs.countries.len(),
        "inputs loaded"
    );

    let report = evaluate_inputs(&inputs, &resolved.effective, input.clock.today())?;

    Ok(DecideOutput {
        report,
        resolved_config: resolved,
    })
}

/// Classify already-loaded inputs. Fails only on reference data that breaks the
/// loader contract; bad traveler records become decisions.
pub fn evaluate_inputs(
    inputs: &Inputs,
    policy: &EvaluationPolicy,
    today: Date,
) -> anyhow::Result<AdmissionReport> {
    let started_at = OffsetDateTime::now_utc();

    let index = PolicyIndex::build(&inputs.watchlist, &inputs.countries)
        .context("build policy index")?;
    tracing::debug!(
        watchlist = index.watchlist_len(),
        countries = index.countries_len(),
        "policy index built"
    );

    let ctx = EvalContext::new(&index, policy, today);
    let domain = evaluate_batch(&inputs.records, &ctx);

    let counts = domain.counts;
    tracing::info!(
        %today,
        profile = %policy.profile,
        accept = counts.accept,
        reject = counts.reject,
        secondary = counts.secondary,
        quarantine = counts.quarantine,
        "travelers classified"
    );

    let data = AdmissionData {
        profile: policy.profile.clone(),
        evaluated_on: today.to_string(),
        visa_validity_days: policy.visa_validity_days,
        name_match: policy.name_match.as_str().to_string(),
        records_evaluated: counts.total(),
        watchlist_entries: count(index.watchlist_len(), "watchlist entries")?,
        countries_indexed: count(index.countries_len(), "indexed countries")?,
    };

    Ok(AdmissionReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "entryguard".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at: OffsetDateTime::now_utc(),
        counts,
        travelers: domain.travelers,
        data,
    })
}

fn count(len: usize, what: &str) -> anyhow::Result<u64> {
    u64::try_from(len).with_context(|| format!("{len} {what} do not fit in a report count"))
}
