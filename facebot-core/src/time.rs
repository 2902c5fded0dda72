//! Millisecond timestamps

/// Milliseconds since boot
///
/// Wraps after ~49.7 days; use [`elapsed`] rather than plain subtraction.
pub type Millis = u32;

/// Time elapsed from `since` to `now`, tolerant of counter wraparound
pub fn elapsed(now: Millis, since: Millis) -> Millis {
    now.wrapping_sub(since)
}
