//! Free-running millisecond clock helpers
//!
//! The engine keeps time as a 32-bit millisecond counter that is allowed to
//! wrap, so every comparison goes through wrapping subtraction.

use embassy_time::{Duration, Instant};

/// Monotonic milliseconds, wrapping at `u32::MAX`
pub type Millis = u32;

/// Milliseconds elapsed from `since` to `now`, correct across one wrap
#[inline]
pub const fn elapsed(now: Millis, since: Millis) -> Millis {
    now.wrapping_sub(since)
}

/// Check if at least `period` has passed since `last`
#[inline]
pub const fn is_due(now: Millis, last: Millis, period: Millis) -> bool {
    elapsed(now, last) >= period
}

/// Truncate an instant to the wrapping 32-bit counter
#[allow(clippy::cast_possible_truncation)]
pub const fn millis_of(instant: Instant) -> Millis {
    instant.as_millis() as Millis
}

/// Convert a duration to milliseconds, saturating at `u32::MAX`
pub fn duration_millis(duration: Duration) -> Millis {
    Millis::try_from(duration.as_millis()).unwrap_or(Millis::MAX)
}
