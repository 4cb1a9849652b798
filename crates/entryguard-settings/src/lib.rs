//! Config parsing and profile/preset resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod presets;
mod resolve;

pub use model::EntryguardConfigV1;
pub use resolve::{Overrides, ResolvedConfig};

/// Parse `entryguard.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<EntryguardConfigV1> {
    let cfg: EntryguardConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the evaluation policy used by the engine (profile + config + overrides).
pub fn resolve_config(
    cfg: EntryguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}
