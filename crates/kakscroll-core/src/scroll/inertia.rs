//! Decelerating tick schedules.
//!
//! Inertial scrolling moves one line per tick with velocity decreasing
//! linearly to zero. Each tick's budget is the inverse of the instantaneous
//! velocity; the initial velocity is solved so the total (omitting the
//! final tick, which is never paced) matches what fixed pacing would take:
//!
//! ```text
//! (n - 1) * d = sum of 1/v_i  for i in 1..n,  v_i = v1 * (n - i + 1) / n
//! ```
//!
//! which gives v1 = n * H(n) / ((n - 1) * d) with H(n) = sum 1/x for
//! x in 2..=n.

use std::time::Duration;

use super::plan::Tick;

/// Build a one-line-per-tick schedule covering `lines` lines, paced so the
/// whole run takes about `(lines - 1) * tick_duration`.
pub fn schedule(lines: u32, tick_duration: Duration) -> Vec<Tick> {
    if lines == 0 {
        return Vec::new();
    }
    // A single line has no interior ticks to pace.
    if lines == 1 {
        return vec![Tick {
            lines: 1,
            budget: Duration::ZERO,
        }];
    }

    let n = f64::from(lines);
    let d = tick_duration.as_secs_f64();
    let harmonic: f64 = (2..=lines).map(|x| 1.0 / f64::from(x)).sum();
    let mut velocity = n * harmonic / ((n - 1.0) * d);
    let step = velocity / n;

    let mut ticks = Vec::with_capacity(lines as usize);
    for i in 0..lines {
        let budget = if i + 1 == lines {
            Duration::ZERO
        } else {
            Duration::from_secs_f64(1.0 / velocity)
        };
        ticks.push(Tick { lines: 1, budget });
        velocity -= step;
    }
    ticks
}
