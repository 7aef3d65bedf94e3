//! Client half of the control channel.

use std::path::PathBuf;

use tokio::io::AsyncWriteExt;
use tokio::net::UnixStream;

use super::wire;
use crate::{EditorContext, Result};

/// Sends commands to a Kakoune session over its Unix socket.
///
/// Every command opens a fresh connection, writes one framed message and
/// disconnects; that is how `kak -p` itself behaves, and it keeps the
/// animator free of connection state across ticks.
#[derive(Debug, Clone)]
pub struct KakSender {
    socket_path: PathBuf,
    client: String,
}

impl KakSender {
    /// Create a sender for an explicit socket path.
    pub fn new(socket_path: PathBuf, client: impl Into<String>) -> Self {
        Self {
            socket_path,
            client: client.into(),
        }
    }

    /// Create a sender for the session the context was captured from.
    pub fn from_context(ctx: &EditorContext) -> Result<Self> {
        Ok(Self::new(wire::socket_path(&ctx.session)?, ctx.client.clone()))
    }

    pub fn socket_path(&self) -> &std::path::Path {
        &self.socket_path
    }

    /// Send a raw command to the session.
    pub async fn send_cmd(&self, cmd: &str) -> Result<()> {
        let mut stream = UnixStream::connect(&self.socket_path).await?;
        stream.write_all(&wire::encode_command(cmd)).await?;
        Ok(())
    }

    /// Blocking twin of [`send_cmd`](Self::send_cmd) for hosts without an
    /// async runtime.
    pub fn send_cmd_blocking(&self, cmd: &str) -> Result<()> {
        use std::io::Write;

        let mut stream = std::os::unix::net::UnixStream::connect(&self.socket_path)?;
        stream.write_all(&wire::encode_command(cmd))?;
        Ok(())
    }

    /// Execute a key sequence in the client this sender is bound to.
    pub async fn send_keys(&self, keys: &str) -> Result<()> {
        self.send_cmd(&self.keys_command(keys)).await
    }

    /// Blocking twin of [`send_keys`](Self::send_keys).
    pub fn send_keys_blocking(&self, keys: &str) -> Result<()> {
        self.send_cmd_blocking(&self.keys_command(keys))
    }

    /// Print a message to the editor's `*debug*` buffer.
    pub fn echo_debug_blocking(&self, msg: &str) -> Result<()> {
        self.send_cmd_blocking(&format!("echo -debug %{{{msg}}}"))
    }

    fn keys_command(&self, keys: &str) -> String {
        format!("execute-keys -client {} {}", self.client, keys)
    }
}
