use crate::rules::TagSet;
use entryguard_types::Decision;

/// Collapse fired tags into one decision: Quarantine > Reject > Secondary > Accept.
///
/// `TagSet` iterates in `Tag` order, so its first element is the winner.
pub fn resolve(tags: &TagSet) -> Decision {
    tags.iter()
        .next()
        .map(|t| t.decision())
        .unwrap_or(Decision::Accept)
}
