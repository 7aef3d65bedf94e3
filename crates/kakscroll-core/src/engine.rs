//! Execution engine selection and the per-session animation host.
//!
//! The paced loop prefers a Tokio current-thread runtime. When the runtime
//! cannot be built (the host can refuse the timer or I/O driver resources)
//! the loop degrades to plain blocking sleeps on the calling thread; the
//! two paths emit identical commands with identical pacing. The probe runs
//! once at startup, not per animation.

use std::sync::atomic::{AtomicBool, Ordering};

use tracing::debug;

use crate::ipc::KakSender;
use crate::scroll::{animator, AnimationPlan};
use crate::Result;

/// The two interchangeable ways to drive the paced loop.
pub enum Engine {
    /// Preferred: async sleeps and socket writes on a Tokio runtime.
    Runtime(tokio::runtime::Runtime),
    /// Fallback: blocking sleeps and socket writes on the calling thread.
    Blocking,
}

impl Engine {
    /// Probe the preferred engine once.
    pub fn detect() -> Self {
        match tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => Engine::Runtime(runtime),
            Err(err) => {
                debug!(error = %err, "tokio runtime unavailable, selecting blocking engine");
                Engine::Blocking
            }
        }
    }

    fn is_fallback(&self) -> bool {
        matches!(self, Engine::Blocking)
    }
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Engine::Runtime(_) => "Engine::Runtime",
            Engine::Blocking => "Engine::Blocking",
        })
    }
}

/// Host-session state shared by every animation it runs: the sender, the
/// engine selected at startup, and the one-shot fallback warning flag.
#[derive(Debug)]
pub struct ScrollSession {
    sender: KakSender,
    engine: Engine,
    warned_fallback: AtomicBool,
}

impl ScrollSession {
    /// Create a session host, probing for the preferred engine.
    pub fn new(sender: KakSender) -> Self {
        Self::with_engine(sender, Engine::detect())
    }

    /// Create a session host on an explicit engine.
    pub fn with_engine(sender: KakSender, engine: Engine) -> Self {
        Self {
            sender,
            engine,
            warned_fallback: AtomicBool::new(false),
        }
    }

    /// Run one animation to completion.
    ///
    /// An empty plan returns immediately without touching the socket.
    pub fn animate(&self, plan: &AnimationPlan) -> Result<()> {
        if plan.is_empty() {
            debug!("nothing to scroll");
            return Ok(());
        }
        if self.engine.is_fallback() {
            self.warn_fallback();
        }
        match &self.engine {
            Engine::Runtime(runtime) => runtime.block_on(animator::run(&self.sender, plan)),
            Engine::Blocking => animator::run_blocking(&self.sender, plan),
        }
    }

    /// Surface the degradation once per session, however many animations
    /// end up on the fallback path. Best-effort: a session that cannot be
    /// warned can still be scrolled.
    fn warn_fallback(&self) {
        if self.warned_fallback.swap(true, Ordering::Relaxed) {
            return;
        }
        debug!("async engine unavailable, pacing with blocking sleeps");
        if let Err(err) = self
            .sender
            .echo_debug_blocking("kakscroll: async engine unavailable, using blocking fallback")
        {
            debug!(error = %err, "could not surface fallback warning in the editor");
        }
    }
}
