//! Stable DTOs and IDs used across the entryguard workspace.
//!
//! This crate is intentionally boring:
//! - the four admission decisions and the rule tags that produce them
//! - data types for the emitted report
//! - stable string IDs and codes for admission rules
//! - explain registry for rule guidance

#![forbid(unsafe_code)]

mod decision;
pub mod explain;
pub mod ids;
pub mod receipt;

pub use decision::{Decision, Tag};
pub use explain::{lookup_explanation, ExamplePair, Explanation};
pub use receipt::{
    AdmissionData, AdmissionReport, DecisionCounts, Reason, ToolMeta, TravelerVerdict,
    SCHEMA_REPORT_V1,
};
