//! Render use cases: decision labels, markdown summaries and JSON from in-memory reports.

use anyhow::Context;
use camino::Utf8Path;
use entryguard_types::AdmissionReport;

/// One decision label per line, in input order.
pub fn render_text(report: &AdmissionReport) -> String {
    let mut out = String::new();
    for decision in report.decisions() {
        out.push_str(decision.as_str());
        out.push('\n');
    }
    out
}

pub fn render_markdown(report: &AdmissionReport) -> String {
    let mut out = String::new();

    out.push_str("# Entryguard report\n\n");
    let c = &report.counts;
    out.push_str(&format!(
        "- Evaluated on: {} (profile `{}`, visa window {} days)\n",
        report.data.evaluated_on, report.data.profile, report.data.visa_validity_days
    ));
    out.push_str(&format!(
        "- Travelers: {} (accept {}, secondary {}, reject {}, quarantine {})\n\n",
        c.total(),
        c.accept,
        c.secondary,
        c.reject,
        c.quarantine
    ));

    if report.travelers.is_empty() {
        out.push_str("No travelers.\n");
        return out;
    }

    out.push_str("## Decisions\n\n");
    out.push_str("| # | Decision |\n|---|----------|\n");
    for t in &report.travelers {
        out.push_str(&format!("| {} | **{}** |\n", t.index, t.decision));
    }

    let flagged: Vec<_> = report
        .travelers
        .iter()
        .filter(|t| !t.reasons.is_empty())
        .collect();
    if flagged.is_empty() {
        return out;
    }

    out.push_str("\n## Reasons\n\n");
    for t in flagged {
        out.push_str(&format!("### Traveler {} ({})\n\n", t.index, t.decision));
        for r in &t.reasons {
            out.push_str(&format!(
                "- [{}] `{}` / `{}`: {}\n",
                r.tag.decision(),
                r.rule_id,
                r.code,
                r.message
            ));
        }
        out.push('\n');
    }

    out
}

/// Pretty JSON with a trailing newline.
pub fn serialize_report(report: &AdmissionReport) -> anyhow::Result<Vec<u8>> {
    let mut bytes = serde_json::to_vec_pretty(report).context("serialize report")?;
    bytes.push(b'\n');
    Ok(bytes)
}

/// Write rendered output, creating parent directories as needed.
pub fn write_text(path: &Utf8Path, text: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_str().is_empty()) {
        std::fs::create_dir_all(parent).with_context(|| format!("create {}", parent))?;
    }
    std::fs::write(path, text).with_context(|| format!("write {}", path))?;
    Ok(())
}
