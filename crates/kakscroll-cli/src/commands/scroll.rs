use anyhow::{Context, Result};
use tracing::debug;

use kakscroll_core::{AnimationPlan, EditorContext, KakSender, ScrollRequest, ScrollSession};

/// Run one scroll animation against the calling editor session.
pub fn run(request: ScrollRequest) -> Result<()> {
    let ctx = EditorContext::from_env()
        .context("kakscroll scroll must be launched from a Kakoune %sh{} block")?;

    let plan = AnimationPlan::build(&request, &ctx);
    debug!(
        ticks = plan.ticks.len(),
        lines = plan.total_lines(),
        "derived animation plan"
    );

    let sender = KakSender::from_context(&ctx)?;
    ScrollSession::new(sender).animate(&plan)?;

    Ok(())
}
