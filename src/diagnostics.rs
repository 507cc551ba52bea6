//!
//! Error types for the Clarion crate.
//!
//! # Overview
//!
//! Two layers of errors exist:
//!
//! - [`InvalidMessage`] is raised while building or rendering an
//!   [`ErrorMessage`](crate::ErrorMessage) that breaks a construction rule. It
//!   signals a programming error at the call site and is never retried.
//! - [`ClarionError`] is what the document loader, the config loader and the
//!   CLI return. It wraps `InvalidMessage` transparently and adds the I/O and
//!   decoding failures that only exist once files are involved.
//!
//! Both implement `miette::Diagnostic` with a stable code and a help line, so
//! the CLI can hand them straight to `miette::Report`.

use std::fmt;
use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

use crate::error_messages::*;

/// Which bullet group an item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemGroup {
    /// Background the user needs to understand the problem.
    Context,
    /// The specific input at fault.
    Fault,
}

impl ItemGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemGroup::Context => "Context",
            ItemGroup::Fault => "Fault",
        }
    }
}

impl fmt::Display for ItemGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The construction rule an [`InvalidMessage`] reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidKind {
    /// The problem statement is empty or whitespace only.
    EmptyProblem,
    /// An item is empty or whitespace only. `index` is 1-based within its group.
    EmptyItem { group: ItemGroup, index: usize },
    /// The hint does not end with a question mark.
    HintNotQuestion,
}

impl InvalidKind {
    fn help(&self) -> &'static str {
        match self {
            InvalidKind::EmptyProblem => HELP_EMPTY_PROBLEM,
            InvalidKind::EmptyItem { .. } => HELP_EMPTY_ITEM,
            InvalidKind::HintNotQuestion => HELP_HINT_NOT_QUESTION,
        }
    }
}

impl fmt::Display for InvalidKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidKind::EmptyProblem => f.write_str(ERROR_EMPTY_PROBLEM),
            InvalidKind::EmptyItem { group, index } => f.write_str(
                &ERROR_EMPTY_ITEM
                    .replacen("{}", group.as_str(), 1)
                    .replacen("{}", &index.to_string(), 1),
            ),
            InvalidKind::HintNotQuestion => f.write_str(ERROR_HINT_NOT_QUESTION),
        }
    }
}

/// An `ErrorMessage` violated one of its construction rules.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid message: {kind}")]
pub struct InvalidMessage {
    pub kind: InvalidKind,
}

impl InvalidMessage {
    pub fn new(kind: InvalidKind) -> Self {
        Self { kind }
    }
}

impl From<InvalidKind> for InvalidMessage {
    fn from(kind: InvalidKind) -> Self {
        Self::new(kind)
    }
}

impl Diagnostic for InvalidMessage {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new("clarion::invalid_message"))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.kind.help()))
    }
}

/// Unified error type for everything outside the pure renderer.
#[derive(Debug, Error)]
pub enum ClarionError {
    #[error(transparent)]
    InvalidMessage(#[from] InvalidMessage),
    #[error("Failed to read `{}`.", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to decode `{}`: {message}", .path.display())]
    Decode { path: PathBuf, message: String },
    #[error("Invalid config `{}`: {message}", .path.display())]
    Config { path: PathBuf, message: String },
    #[error("Message {index} in `{}` is invalid.", .path.display())]
    InvalidRecord {
        path: PathBuf,
        /// 1-based position of the record in its document.
        index: usize,
        #[source]
        source: InvalidMessage,
    },
}

impl ClarionError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ClarionError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn decode(path: impl Into<PathBuf>, err: impl fmt::Display) -> Self {
        ClarionError::Decode {
            path: path.into(),
            message: err.to_string(),
        }
    }

    pub(crate) fn config(path: impl Into<PathBuf>, err: impl fmt::Display) -> Self {
        ClarionError::Config {
            path: path.into(),
            message: err.to_string(),
        }
    }
}

impl Diagnostic for ClarionError {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self {
            ClarionError::InvalidMessage(inner) => return inner.code(),
            ClarionError::Io { .. } => "clarion::io",
            ClarionError::Decode { .. } => "clarion::decode",
            ClarionError::Config { .. } => "clarion::config",
            ClarionError::InvalidRecord { .. } => "clarion::invalid_record",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match self {
            ClarionError::InvalidMessage(inner) => return inner.help(),
            ClarionError::InvalidRecord { source, .. } => source.kind.help(),
            ClarionError::Io { .. } => HELP_FILE_READ,
            ClarionError::Decode { .. } => HELP_DECODE,
            ClarionError::Config { .. } => HELP_CONFIG,
        };
        Some(Box::new(help))
    }
}
