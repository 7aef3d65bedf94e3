pub mod config;
pub mod context;
pub mod engine;
pub mod error;
pub mod ipc;
pub mod scroll;

pub use config::{AppConfig, ScrollOptions};
pub use context::EditorContext;
pub use engine::{Engine, ScrollSession};
pub use error::{Error, Result};
pub use ipc::KakSender;
pub use scroll::{AnimationPlan, Direction, Extent, ScrollRequest};
