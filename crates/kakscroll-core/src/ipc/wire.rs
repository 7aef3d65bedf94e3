//! Wire format for Kakoune's remote command protocol.
//!
//! A command is a single framed message: a one-byte message kind, the whole
//! message length as a u32, then the command string prefixed with its own
//! u32 length. Length fields use the platform's native byte order; the
//! socket never crosses a machine boundary.

use std::path::PathBuf;

use crate::{Error, Result};

/// Message kind byte for "execute this command".
const MSG_COMMAND: u8 = 0x02;

/// Kind byte plus whole-message length field.
const HEADER_LEN: usize = 5;

/// Frame a command string for the session socket.
pub fn encode_command(cmd: &str) -> Vec<u8> {
    let payload = cmd.as_bytes();
    let content_len = 4 + payload.len();
    let mut buf = Vec::with_capacity(HEADER_LEN + content_len);
    buf.push(MSG_COMMAND);
    buf.extend_from_slice(&((HEADER_LEN + content_len) as u32).to_ne_bytes());
    buf.extend_from_slice(&(payload.len() as u32).to_ne_bytes());
    buf.extend_from_slice(payload);
    buf
}

/// Locate the session socket.
///
/// Kakoune puts sockets in `$XDG_RUNTIME_DIR/kakoune/<session>`, or in
/// `${TMPDIR:-/tmp}/kakoune/$USER/<session>` when no runtime directory is
/// available.
pub fn socket_path(session: &str) -> Result<PathBuf> {
    let dir = match std::env::var_os("XDG_RUNTIME_DIR") {
        Some(runtime) => PathBuf::from(runtime).join("kakoune"),
        None => {
            let tmp = std::env::var_os("TMPDIR").unwrap_or_else(|| "/tmp".into());
            let user = std::env::var("USER").map_err(|_| Error::MissingEnv("USER"))?;
            PathBuf::from(tmp).join("kakoune").join(user)
        }
    };
    Ok(dir.join(session))
}
