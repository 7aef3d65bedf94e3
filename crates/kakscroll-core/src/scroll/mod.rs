//! Smooth scrolling animation for Kakoune
//!
//! Turns one scroll request into a schedule of small viewport steps and
//! paces their emission against a per-tick time budget, so the viewport
//! glides instead of jumping.
//!
//! - `plan` - request types and extent arithmetic (how far, in which steps)
//! - `keys` - the keystroke payload for one step
//! - `timing` - drift-compensated pacing math
//! - `inertia` - decelerating tick schedules
//! - `animator` - the paced emission loop
//!
//! # Usage
//!
//! ```ignore
//! use kakscroll_core::scroll::{AnimationPlan, Direction, Extent, ScrollRequest};
//! use kakscroll_core::{EditorContext, KakSender, ScrollSession};
//!
//! let ctx = EditorContext::from_env()?;
//! let request = ScrollRequest {
//!     direction: Direction::Down,
//!     extent: Extent::Half,
//!     count: 1,
//!     tick_duration_ms: 10.0,
//!     tick_size: 1,
//! };
//! let plan = AnimationPlan::build(&request, &ctx);
//! ScrollSession::new(KakSender::from_context(&ctx)?).animate(&plan)?;
//! ```

pub mod animator;
pub mod inertia;
pub mod keys;
pub mod plan;
pub mod timing;

pub use plan::{AnimationPlan, Direction, Extent, ScrollRequest, Tick};
