//! The Clarion Command-Line Interface.
//!
//! This module is the main entry point for all CLI commands and orchestrates
//! the core library functions.

use std::path::Path;
use std::process;

use clap::Parser;
use log::LevelFilter;

use crate::cli::args::{ClarionArgs, Command, RenderArgs};
use crate::config::ClarionConfig;
use crate::diagnostics::ClarionError;
use crate::input::load_messages;
use crate::message::ErrorMessage;
use crate::options::{Mode, RenderOptions, TerminalCaps};
use crate::MessageComposer;

pub mod args;
pub mod output;

/// The main entry point for the CLI.
pub fn run() {
    let args = ClarionArgs::parse();
    init_logging(args.verbose);

    if let Err(e) = dispatch(args) {
        output::print_error(e);
        process::exit(1);
    }
}

/// Sets up `env_logger`. `RUST_LOG` overrides the `-v` level.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .try_init();
}

fn dispatch(args: ClarionArgs) -> Result<(), ClarionError> {
    let options = render_options(&args.render)?;
    log::info!("rendering with {:?}", options);
    let composer = MessageComposer::new(options);

    match args.command {
        Command::Render {
            problem,
            context,
            fault,
            hint,
        } => handle_render(&composer, problem, context, fault, hint),
        Command::File { path } => handle_file(&composer, &path),
        Command::Check { path } => handle_check(&path, options.use_color),
    }
}

/// Merges the config file with command-line overrides and resolves it
/// against stdout's capabilities.
pub fn render_options(args: &RenderArgs) -> Result<RenderOptions, ClarionError> {
    let mut config = match &args.config {
        Some(path) => ClarionConfig::load(path)?,
        None => ClarionConfig::discover(".")?,
    };
    if let Some(color) = args.color {
        config.color = color;
    }
    if args.ascii {
        config.symbols = Mode::Never;
    } else if let Some(symbols) = args.symbols {
        config.symbols = symbols;
    }
    if let Some(max_items) = args.max_items {
        config.max_items = max_items;
    }
    Ok(config.resolve(&TerminalCaps::detect_stream(atty::Stream::Stdout)))
}

/// Handles the `render` subcommand.
fn handle_render(
    composer: &MessageComposer,
    problem: String,
    context: Vec<String>,
    fault: Vec<String>,
    hint: Option<String>,
) -> Result<(), ClarionError> {
    let mut builder = ErrorMessage::builder(problem);
    for item in context {
        builder = builder.context(item);
    }
    for item in fault {
        builder = builder.fault(item);
    }
    if let Some(hint) = hint {
        builder = builder.hint(hint);
    }
    let message = builder.build()?;
    output::print_message(&composer.render(&message)?)
}

/// Handles the `file` subcommand.
fn handle_file(composer: &MessageComposer, path: &Path) -> Result<(), ClarionError> {
    let messages = load_messages(path)?;
    log::info!("rendering {} message(s) from {}", messages.len(), path.display());
    output::print_message(&composer.render_all(&messages)?)
}

/// Handles the `check` subcommand.
fn handle_check(path: &Path, use_color: bool) -> Result<(), ClarionError> {
    let messages = load_messages(path)?;
    output::print_check_summary(messages.len(), use_color);
    Ok(())
}
