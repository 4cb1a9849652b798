//! Pure admission evaluation (no IO).
//!
//! Input: traveler records plus a policy index built once from the watchlist and
//! country policy table, and the calendar date to measure visa ages against.
//! Output: exactly one decision per record, in input order, with the reasons behind it.

#![forbid(unsafe_code)]

pub mod clock;
pub mod error;
pub mod index;
pub mod model;
pub mod policy;
pub mod report;
pub mod resolve;
pub mod rules;
pub mod validate;

mod engine;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use clock::{Clock, FixedClock, SystemClock};
pub use engine::{Classification, EvalContext, classify, classify_all, decide, evaluate_batch};
pub use error::PolicyError;
pub use index::PolicyIndex;
pub use resolve::resolve;
pub use rules::{TagSet, evaluate};
pub use validate::{ValidationResult, validate};
