//! Request types and plan derivation.
//!
//! A plan is computed once per invocation from the request and the editor
//! snapshot, then consumed tick by tick. The amount arithmetic mirrors the
//! editor's own page-scroll commands: a screen is `window_height - 2` lines
//! (two lines of UI chrome), a half-screen extent halves that, and the
//! count prefix multiplies it. The result is clamped so the animation never
//! runs past the buffer edge.

use std::time::Duration;

use super::{inertia, timing};
use crate::EditorContext;

/// Scroll direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Down,
    Up,
}

/// How much of the screen one count's worth of scrolling covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extent {
    Full,
    Half,
}

impl Extent {
    #[inline]
    fn divisor(self) -> u64 {
        match self {
            Extent::Full => 1,
            Extent::Half => 2,
        }
    }
}

/// One scroll invocation as requested by an editor mapping.
#[derive(Debug, Clone)]
pub struct ScrollRequest {
    pub direction: Direction,
    pub extent: Extent,
    /// Count prefix typed in the editor; 0 behaves as 1.
    pub count: u32,
    /// Target time budget per tick, in milliseconds.
    pub tick_duration_ms: f64,
    /// Lines advanced per tick; 0 selects inertial pacing.
    pub tick_size: u32,
}

/// One emitted scroll step and the time budget that paces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    pub lines: u32,
    pub budget: Duration,
}

/// The derived per-tick schedule for one invocation.
#[derive(Debug, Clone)]
pub struct AnimationPlan {
    pub direction: Direction,
    pub ticks: Vec<Tick>,
}

impl AnimationPlan {
    /// Derive the schedule from a request and the editor snapshot.
    ///
    /// An empty schedule means there is nothing to do: the cursor is
    /// already at the buffer edge, or the clamped amount is smaller than a
    /// single tick. Callers treat that as a silent no-op.
    pub fn build(request: &ScrollRequest, ctx: &EditorContext) -> Self {
        let max_scroll = match request.direction {
            Direction::Down => ctx.buf_line_count.saturating_sub(ctx.cursor_line),
            Direction::Up => ctx.cursor_line.saturating_sub(1),
        };
        if max_scroll == 0 {
            return Self {
                direction: request.direction,
                ticks: Vec::new(),
            };
        }

        // Multiply before the truncating divide so odd window heights come
        // out the same as the editor's own half-screen rounding.
        let count = u64::from(request.count.max(1));
        let screen = u64::from(ctx.window_height.saturating_sub(2));
        let amount =
            (count * screen / request.extent.divisor()).min(u64::from(max_scroll)) as u32;

        let budget = timing::duration_from_ms(request.tick_duration_ms);
        // Sub-millisecond budgets force fixed pacing so the inertial
        // velocity math never sees a near-zero duration.
        let ticks = if request.tick_size == 0 && request.tick_duration_ms >= 1.0 {
            inertia::schedule(amount, budget)
        } else {
            fixed_schedule(amount, request.tick_size.max(1), budget)
        };

        Self {
            direction: request.direction,
            ticks,
        }
    }

    /// Total lines the plan scrolls across all ticks.
    pub fn total_lines(&self) -> u64 {
        self.ticks.iter().map(|t| u64::from(t.lines)).sum()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ticks.is_empty()
    }
}

/// Uniform schedule: `amount / tick_size` ticks of `tick_size` lines each.
/// The final tick carries no budget; there is nothing left to pace after
/// the last emission.
fn fixed_schedule(amount: u32, tick_size: u32, budget: Duration) -> Vec<Tick> {
    let tick_count = amount / tick_size;
    (0..tick_count)
        .map(|i| Tick {
            lines: tick_size,
            budget: if i + 1 == tick_count {
                Duration::ZERO
            } else {
                budget
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(cursor_line: u32, buf_line_count: u32, window_height: u32) -> EditorContext {
        EditorContext {
            session: "test".to_string(),
            client: "client0".to_string(),
            cursor_line,
            buf_line_count,
            window_height,
        }
    }

    fn request(direction: Direction, extent: Extent, count: u32) -> ScrollRequest {
        ScrollRequest {
            direction,
            extent,
            count,
            tick_duration_ms: 10.0,
            tick_size: 1,
        }
    }

    #[test]
    fn test_half_screen_down() {
        // cursor 50 of 200, window 42: half a screen is (42-2)/2 = 20 lines
        let plan = AnimationPlan::build(
            &request(Direction::Down, Extent::Half, 1),
            &ctx(50, 200, 42),
        );
        assert_eq!(plan.ticks.len(), 20);
        assert_eq!(plan.total_lines(), 20);
        assert_eq!(plan.direction, Direction::Down);
    }

    #[test]
    fn test_up_clamps_to_lines_above_cursor() {
        // cursor on line 5: only 4 lines of room however big the window is
        let plan = AnimationPlan::build(
            &request(Direction::Up, Extent::Full, 1),
            &ctx(5, 200, 42),
        );
        assert_eq!(plan.ticks.len(), 4);
        assert_eq!(plan.total_lines(), 4);
    }

    #[test]
    fn test_top_of_buffer_is_noop() {
        let plan = AnimationPlan::build(
            &request(Direction::Up, Extent::Half, 1),
            &ctx(1, 200, 42),
        );
        assert!(plan.is_empty());
    }

    #[test]
    fn test_bottom_of_buffer_is_noop() {
        let plan = AnimationPlan::build(
            &request(Direction::Down, Extent::Full, 1),
            &ctx(200, 200, 42),
        );
        assert!(plan.is_empty());
    }

    #[test]
    fn test_zero_count_behaves_as_one() {
        let zero = AnimationPlan::build(
            &request(Direction::Down, Extent::Half, 0),
            &ctx(50, 200, 42),
        );
        let one = AnimationPlan::build(
            &request(Direction::Down, Extent::Half, 1),
            &ctx(50, 200, 42),
        );
        assert_eq!(zero.ticks.len(), one.ticks.len());
    }

    #[test]
    fn test_count_multiplies_amount() {
        let plan = AnimationPlan::build(
            &request(Direction::Down, Extent::Half, 3),
            &ctx(50, 200, 42),
        );
        assert_eq!(plan.total_lines(), 60);
    }

    #[test]
    fn test_odd_window_height_truncates_like_the_editor() {
        // 3 * (43-2) / 2 = 61, not 3 * 20 = 60
        let plan = AnimationPlan::build(
            &request(Direction::Down, Extent::Half, 3),
            &ctx(1, 500, 43),
        );
        assert_eq!(plan.total_lines(), 61);
    }

    #[test]
    fn test_never_scrolls_past_buffer_edge() {
        let plan = AnimationPlan::build(
            &request(Direction::Down, Extent::Full, 9),
            &ctx(150, 200, 42),
        );
        assert_eq!(plan.total_lines(), 50);
    }

    #[test]
    fn test_tick_size_divides_amount_with_truncation() {
        let mut req = request(Direction::Down, Extent::Half, 1);
        req.tick_size = 3;
        let plan = AnimationPlan::build(&req, &ctx(50, 200, 42));
        // 20 lines in ticks of 3: floor gives 6 ticks, 18 lines
        assert_eq!(plan.ticks.len(), 6);
        assert_eq!(plan.total_lines(), 18);
        assert!(plan.ticks.iter().all(|t| t.lines == 3));
    }

    #[test]
    fn test_amount_smaller_than_tick_is_noop() {
        let mut req = request(Direction::Up, Extent::Full, 1);
        req.tick_size = 10;
        let plan = AnimationPlan::build(&req, &ctx(5, 200, 42));
        assert!(plan.is_empty());
    }

    #[test]
    fn test_only_final_tick_has_zero_budget() {
        let plan = AnimationPlan::build(
            &request(Direction::Down, Extent::Half, 1),
            &ctx(50, 200, 42),
        );
        let (last, rest) = plan.ticks.split_last().unwrap();
        assert_eq!(last.budget, Duration::ZERO);
        assert!(rest.iter().all(|t| t.budget == Duration::from_millis(10)));
    }

    #[test]
    fn test_zero_tick_size_selects_inertial_pacing() {
        let mut req = request(Direction::Down, Extent::Half, 1);
        req.tick_size = 0;
        let plan = AnimationPlan::build(&req, &ctx(50, 200, 42));
        // one line per tick, decelerating budgets
        assert_eq!(plan.ticks.len(), 20);
        assert!(plan.ticks.iter().all(|t| t.lines == 1));
        assert!(plan.ticks[0].budget < plan.ticks[10].budget);
    }

    #[test]
    fn test_sub_millisecond_budget_forces_fixed_pacing() {
        let mut req = request(Direction::Down, Extent::Half, 1);
        req.tick_size = 0;
        req.tick_duration_ms = 0.5;
        let plan = AnimationPlan::build(&req, &ctx(50, 200, 42));
        assert_eq!(plan.ticks.len(), 20);
        let (_, rest) = plan.ticks.split_last().unwrap();
        assert!(rest.iter().all(|t| t.budget == Duration::from_micros(500)));
    }
}
