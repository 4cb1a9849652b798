//! Source of the evaluation date.
//!
//! The engine itself only ever sees a `Date`; callers pick the clock.

use time::error::IndeterminateOffset;
use time::{Date, OffsetDateTime, UtcOffset};

pub trait Clock: Send + Sync {
    fn today(&self) -> Date;
}

/// Wall-clock calendar date as seen from a fixed UTC offset.
///
/// The offset is captured once at construction. The CLI builds this with
/// [`SystemClock::local`] and falls back to [`SystemClock::utc`] when the
/// platform cannot report the local offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SystemClock {
    offset: UtcOffset,
}

impl SystemClock {
    /// The machine's local calendar date.
    ///
    /// Fails on platforms (or multi-threaded Unix processes) where `time`
    /// refuses to read the local offset.
    pub fn local() -> Result<Self, IndeterminateOffset> {
        UtcOffset::current_local_offset().map(Self::with_offset)
    }

    pub const fn utc() -> Self {
        Self::with_offset(UtcOffset::UTC)
    }

    pub const fn with_offset(offset: UtcOffset) -> Self {
        Self { offset }
    }

    pub fn offset(&self) -> UtcOffset {
        self.offset
    }

    fn date_at(&self, now: OffsetDateTime) -> Date {
        now.to_offset(self.offset).date()
    }
}

impl Clock for SystemClock {
    fn today(&self) -> Date {
        self.date_at(OffsetDateTime::now_utc())
    }
}

/// Always returns the same date. Used for replays and tests.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedClock(pub Date);

impl Clock for FixedClock {
    fn today(&self) -> Date {
        self.0
    }
}
