//! The paced emission loop.
//!
//! One tick: emit the keystroke command, timestamp, sleep whatever is left
//! of the tick's budget after the emission overhead. A tick that overruns
//! its budget skips the sleep and the rolling timestamp absorbs the drift
//! on the next iteration. Ticks are strictly sequential; there is no
//! look-ahead or batching.
//!
//! The async and blocking bodies are twins on purpose: the engine picks one
//! at startup and both must pace identically.

use std::time::Instant;

use tracing::trace;

use super::keys;
use super::plan::AnimationPlan;
use super::timing;
use crate::ipc::KakSender;
use crate::Result;

/// Drive a plan to completion on the async engine.
pub async fn run(sender: &KakSender, plan: &AnimationPlan) -> Result<()> {
    let mut t_prev = Instant::now();
    for tick in &plan.ticks {
        sender
            .send_keys(&keys::tick_keys(plan.direction, tick.lines))
            .await?;
        let t_now = Instant::now();
        match timing::remaining_delay(tick.budget, t_now - t_prev) {
            Some(delay) => tokio::time::sleep(delay).await,
            None => trace!(budget_us = tick.budget.as_micros() as u64, "tick overran budget"),
        }
        t_prev = t_now;
    }
    Ok(())
}

/// Blocking twin of [`run`] for hosts without an async runtime.
pub fn run_blocking(sender: &KakSender, plan: &AnimationPlan) -> Result<()> {
    let mut t_prev = Instant::now();
    for tick in &plan.ticks {
        sender.send_keys_blocking(&keys::tick_keys(plan.direction, tick.lines))?;
        let t_now = Instant::now();
        match timing::remaining_delay(tick.budget, t_now - t_prev) {
            Some(delay) => std::thread::sleep(delay),
            None => trace!(budget_us = tick.budget.as_micros() as u64, "tick overran budget"),
        }
        t_prev = t_now;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Read;
    use std::os::unix::net::UnixListener;
    use std::time::Duration;

    use super::*;
    use crate::ipc::encode_command;
    use crate::scroll::plan::{Direction, Tick};

    fn accept_frames(listener: UnixListener, count: usize) -> std::thread::JoinHandle<Vec<Vec<u8>>> {
        std::thread::spawn(move || {
            (0..count)
                .map(|_| {
                    let (mut conn, _) = listener.accept().unwrap();
                    let mut buf = Vec::new();
                    conn.read_to_end(&mut buf).unwrap();
                    buf
                })
                .collect()
        })
    }

    fn plan(direction: Direction, ticks: usize) -> AnimationPlan {
        let ticks = (0..ticks)
            .map(|i| Tick {
                lines: 1,
                budget: if i + 1 == ticks {
                    Duration::ZERO
                } else {
                    Duration::from_millis(1)
                },
            })
            .collect();
        AnimationPlan { direction, ticks }
    }

    #[tokio::test]
    async fn test_emits_one_command_per_tick() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session");
        let server = accept_frames(UnixListener::bind(&path).unwrap(), 3);

        let sender = KakSender::new(path, "client0");
        run(&sender, &plan(Direction::Down, 3)).await.unwrap();

        let frames = server.join().unwrap();
        let expected = encode_command("execute-keys -client client0 1j1vj");
        assert_eq!(frames, vec![expected.clone(), expected.clone(), expected]);
    }

    #[tokio::test]
    async fn test_empty_plan_emits_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session");
        // No listener bound: any emission would error out.
        let sender = KakSender::new(path, "client0");
        run(&sender, &plan(Direction::Down, 0)).await.unwrap();
    }

    #[test]
    fn test_blocking_loop_emits_identical_commands() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session");
        let server = accept_frames(UnixListener::bind(&path).unwrap(), 2);

        let sender = KakSender::new(path, "client0");
        run_blocking(&sender, &plan(Direction::Up, 2)).unwrap();

        let frames = server.join().unwrap();
        let expected = encode_command("execute-keys -client client0 1k1vk");
        assert_eq!(frames, vec![expected.clone(), expected]);
    }

    #[tokio::test]
    async fn test_stops_at_first_failed_emission() {
        let dir = tempfile::tempdir().unwrap();
        let sender = KakSender::new(dir.path().join("gone"), "client0");
        assert!(run(&sender, &plan(Direction::Down, 3)).await.is_err());
    }
}
