//! Decomposed time-remaining value

use std::fmt;

const MILLIS_PER_SECOND: u64 = 1_000;
const MILLIS_PER_MINUTE: u64 = 60_000;
const MILLIS_PER_HOUR: u64 = 3_600_000;
const MILLIS_PER_DAY: u64 = 86_400_000;

/// Time left until the target, split into calendar-free components.
///
/// `hours < 24`, `minutes < 60` and `seconds < 60` always hold; `days` is
/// unbounded. Sub-second remainders are truncated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RemainingDuration {
    pub days: u64,
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
}

impl RemainingDuration {
    /// The all-zero frame shown before the first tick
    pub const ZERO: Self = Self {
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    /// Decompose a non-negative millisecond duration
    pub fn from_millis(millis: u64) -> Self {
        Self {
            days: millis / MILLIS_PER_DAY,
            hours: ((millis / MILLIS_PER_HOUR) % 24) as u8,
            minutes: ((millis / MILLIS_PER_MINUTE) % 60) as u8,
            seconds: ((millis / MILLIS_PER_SECOND) % 60) as u8,
        }
    }

    /// Milliseconds represented by this value (whole seconds only)
    pub fn as_millis(&self) -> u64 {
        self.days * MILLIS_PER_DAY
            + u64::from(self.hours) * MILLIS_PER_HOUR
            + u64::from(self.minutes) * MILLIS_PER_MINUTE
            + u64::from(self.seconds) * MILLIS_PER_SECOND
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

impl fmt::Display for RemainingDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}d {}h {}m {}s",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}
