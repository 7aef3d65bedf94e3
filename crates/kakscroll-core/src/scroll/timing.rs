//! Pacing math for the emission loop.
//!
//! Durations cross the CLI and config boundary as milliseconds and are
//! converted to [`Duration`] here, in one place.

use std::time::Duration;

/// Convert a millisecond count from the invocation boundary.
///
/// Negative and non-finite inputs collapse to zero rather than panicking in
/// `Duration::from_secs_f64`.
#[inline]
pub fn duration_from_ms(ms: f64) -> Duration {
    if ms.is_finite() && ms > 0.0 {
        Duration::from_secs_f64(ms / 1000.0)
    } else {
        Duration::ZERO
    }
}

/// Sleep remaining for a tick after subtracting the time emission took.
///
/// Returns `None` when the tick already overran its budget; the loop skips
/// the sleep entirely and self-corrects instead of accumulating delay.
#[inline]
pub fn remaining_delay(budget: Duration, elapsed: Duration) -> Option<Duration> {
    budget.checked_sub(elapsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_from_ms() {
        assert_eq!(duration_from_ms(10.0), Duration::from_millis(10));
        assert_eq!(duration_from_ms(0.5), Duration::from_micros(500));
        assert_eq!(duration_from_ms(0.0), Duration::ZERO);
        assert_eq!(duration_from_ms(-3.0), Duration::ZERO);
        assert_eq!(duration_from_ms(f64::NAN), Duration::ZERO);
    }

    #[test]
    fn test_remaining_delay_subtracts_overhead() {
        let budget = Duration::from_millis(10);
        assert_eq!(
            remaining_delay(budget, Duration::from_millis(4)),
            Some(Duration::from_millis(6))
        );
    }

    #[test]
    fn test_exhausted_budget_sleeps_zero() {
        let budget = Duration::from_millis(10);
        assert_eq!(remaining_delay(budget, budget), Some(Duration::ZERO));
    }

    #[test]
    fn test_overrun_skips_sleep() {
        let budget = Duration::from_millis(10);
        assert_eq!(remaining_delay(budget, Duration::from_millis(11)), None);
    }
}
