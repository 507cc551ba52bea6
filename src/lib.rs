pub use crate::composer::{render, Bullet, MessageComposer};
pub use crate::config::ClarionConfig;
pub use crate::diagnostics::{ClarionError, InvalidKind, InvalidMessage, ItemGroup};
pub use crate::message::{ErrorMessage, MessageBuilder};
pub use crate::options::{Mode, RenderOptions, TerminalCaps};

pub mod cli;
pub mod composer;
pub mod config;
pub mod diagnostics;
pub mod error_messages;
pub mod input;
pub mod message;
pub mod options;
