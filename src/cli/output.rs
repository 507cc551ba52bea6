//! Handles all user-facing output for the CLI.
//!
//! Rendered messages go to stdout untouched; the composer has already
//! decided on colour. Failures go to stderr as `miette` reports.

use std::io::{self, Write};

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::diagnostics::ClarionError;

/// Prints rendered message text followed by a newline.
pub fn print_message(text: &str) -> Result<(), ClarionError> {
    write_message(&mut io::stdout().lock(), text)
}

/// Writes `text` and a newline to `w`.
///
/// A reader that goes away early (`clarion file big.yaml | head -1`) is not an
/// error; the rest of the output is dropped.
pub fn write_message(w: &mut impl Write, text: &str) -> Result<(), ClarionError> {
    match writeln!(w, "{}", text).and_then(|()| w.flush()) {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
            log::debug!("stdout closed before output was written");
            Ok(())
        }
        result => result.map_err(|e| ClarionError::io("<stdout>", e)),
    }
}

/// Prints the summary line of `clarion check`.
pub fn print_check_summary(count: usize, use_color: bool) {
    let choice = if use_color {
        ColorChoice::Always
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);
    let noun = if count == 1 { "message" } else { "messages" };
    let _ = write!(stdout, "{} {} ", count, noun);
    let _ = stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true));
    let _ = write!(stdout, "OK");
    let _ = stdout.reset();
    let _ = writeln!(stdout);
}

/// Prints an error to stderr as a `miette` report.
pub fn print_error(err: ClarionError) {
    eprintln!("{:?}", miette::Report::new(err));
}
