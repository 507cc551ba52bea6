//! Defines the command-line arguments and subcommands for the Clarion CLI.
//!
//! This module uses the `clap` crate with its "derive" feature to create a
//! declarative and type-safe argument parsing structure.

use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::options::Mode;

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "clarion",
    version,
    about = "Compose error messages with contextual and faulty-input bullets."
)]
pub struct ClarionArgs {
    #[command(subcommand)]
    pub command: Command,

    #[command(flatten)]
    pub render: RenderArgs,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace). `RUST_LOG` wins when set.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

/// Flags shared by every subcommand that controls how messages look.
#[derive(Debug, Default, Args)]
pub struct RenderArgs {
    /// When to colour output.
    #[arg(long, value_enum, global = true)]
    pub color: Option<Mode>,

    /// When to use the ℹ/✖ bullet symbols instead of `*`.
    #[arg(long, value_enum, global = true)]
    pub symbols: Option<Mode>,

    /// Shorthand for `--symbols never`.
    #[arg(long, global = true)]
    pub ascii: bool,

    /// Bulleted items to show before summarising the rest.
    #[arg(long, global = true)]
    pub max_items: Option<NonZeroUsize>,

    /// Config file to use instead of `./clarion.yaml`.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// An enumeration of all available CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render a single message from command-line parts.
    Render {
        /// The problem statement.
        problem: String,
        /// A contextual item (repeatable, kept in order).
        #[arg(short = 'i', long = "context")]
        context: Vec<String>,
        /// A faulty-input item (repeatable, kept in order).
        #[arg(short = 'x', long = "fault")]
        fault: Vec<String>,
        /// A suggested fix, phrased as a question.
        #[arg(long)]
        hint: Option<String>,
    },
    /// Render every message in a YAML or JSON document.
    File {
        /// The path to the message document.
        #[arg(required = true)]
        path: PathBuf,
    },
    /// Validate a YAML or JSON document without rendering it.
    Check {
        /// The path to the message document.
        #[arg(required = true)]
        path: PathBuf,
    },
}
