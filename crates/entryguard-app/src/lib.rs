//! Use case orchestration for entryguard.
//!
//! This crate provides the application layer: use cases that coordinate the settings,
//! loader, and domain layers and shape the result into a report. It is intentionally thin.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod decide;
mod explain;
mod render;
mod report;

pub use decide::{DecideInput, DecideOutput, evaluate_inputs, run_decide};
pub use explain::{ExplainOutput, format_explanation, format_not_found, run_explain};
pub use render::{render_markdown, render_text, serialize_report, write_text};
pub use report::{OutputFormat, parse_output_format, parse_report_json};
