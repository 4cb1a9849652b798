use entryguard_types::{DecisionCounts, TravelerVerdict};

#[derive(Clone, Debug, Default)]
pub struct DomainReport {
    /// One verdict per input record, in input order.
    pub travelers: Vec<TravelerVerdict>,
    pub counts: DecisionCounts,
}
