use super::reason;
use crate::engine::EvalContext;
use crate::model::TravelerRecord;
use crate::policy::NameMatch;
use entryguard_types::{Reason, Tag, ids};

pub fn run(record: &TravelerRecord, ctx: &EvalContext<'_>, out: &mut Vec<Reason>) {
    if let (Some(first), Some(last)) = (record.first_name.as_deref(), record.last_name.as_deref())
    {
        let hit = match ctx.policy.name_match {
            NameMatch::AnyEntry => ctx.index.is_on_watchlist_by_name(first, last),
            NameMatch::SameEntry => ctx.index.is_on_watchlist_by_name_pair(first, last),
        };
        if hit {
            out.push(reason(
                Tag::Secondary,
                ids::RULE_WATCHLIST,
                ids::CODE_WATCHLIST_NAME,
                format!(
                    "name '{first} {last}' matches the watchlist ({})",
                    ctx.policy.name_match.as_str()
                ),
            ));
        }
    }

    if let Some(passport) = record.passport_number.as_deref() {
        if ctx.index.is_on_watchlist_by_passport(passport) {
            out.push(reason(
                Tag::Secondary,
                ids::RULE_WATCHLIST,
                ids::CODE_WATCHLIST_PASSPORT,
                format!("passport '{passport}' matches the watchlist"),
            ));
        }
    }
}
