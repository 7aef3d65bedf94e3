//! Control channel to a running Kakoune session
//!
//! Kakoune listens on a per-session Unix socket and accepts framed command
//! messages, the same channel `kak -p` uses. The animator only ever writes
//! to it; nothing is read back.

mod sender;
mod wire;

pub use sender::KakSender;
pub use wire::{encode_command, socket_path};
