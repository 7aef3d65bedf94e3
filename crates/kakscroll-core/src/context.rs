//! Editor state captured at invocation time.
//!
//! Kakoune exports `kak_*` variables to `%sh{}` blocks that mention them.
//! The snapshot is taken once when the animation starts and never refreshed;
//! a buffer that grows or shrinks mid-animation is simply scrolled against
//! stale bounds.

use crate::{Error, Result};

/// Snapshot of the editor session the animation runs against.
#[derive(Debug, Clone)]
pub struct EditorContext {
    /// Kakoune session name (socket name under the runtime directory).
    pub session: String,
    /// Client within the session whose window scrolls.
    pub client: String,
    /// 1-based cursor line.
    pub cursor_line: u32,
    /// Total lines in the current buffer.
    pub buf_line_count: u32,
    /// Visible window height in lines.
    pub window_height: u32,
}

impl EditorContext {
    /// Read the context from the calling `%sh{}` environment.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            session: require_env("kak_session")?,
            client: require_env("kak_client")?,
            cursor_line: numeric_env("kak_cursor_line")?,
            buf_line_count: numeric_env("kak_buf_line_count")?,
            window_height: numeric_env("kak_window_height")?,
        })
    }
}

fn require_env(name: &'static str) -> Result<String> {
    std::env::var(name).map_err(|_| Error::MissingEnv(name))
}

fn numeric_env(name: &'static str) -> Result<u32> {
    let value = require_env(name)?;
    value
        .trim()
        .parse()
        .map_err(|_| Error::InvalidEnv { name, value })
}
