use anyhow::Context;
use entryguard_types::{AdmissionReport, SCHEMA_REPORT_V1};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// One decision label per line.
    Text,
    Json,
    Markdown,
}

pub fn parse_output_format(v: &str) -> anyhow::Result<OutputFormat> {
    match v {
        "text" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        other => anyhow::bail!("unknown format: {other} (expected text|json|markdown)"),
    }
}

/// Parse a previously written report. Only `entryguard.report.v1` is understood.
pub fn parse_report_json(text: &str) -> anyhow::Result<AdmissionReport> {
    let value: serde_json::Value = serde_json::from_str(text).context("parse report json")?;

    let schema = value
        .get("schema")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();

    if schema != SCHEMA_REPORT_V1 {
        anyhow::bail!("unknown report schema: {schema}");
    }

    serde_json::from_value(value).context("parse entryguard v1 report")
}
