//! The message composer.
//!
//! Rendering is a single pass over a validated [`ErrorMessage`]:
//!
//! 1. the problem statement with its connector (`:` when lines follow, `.`
//!    otherwise),
//! 2. context items, then fault items, capped at `max_items` in total,
//! 3. the aggregate line when items were dropped,
//! 4. the hint.
//!
//! Lines are joined with `\n` and there is no trailing newline. Colour is
//! written through `termcolor`, so the same code path produces plain and ANSI
//! output; only the problem statement, the bullet prefixes and the aggregate
//! line are ever coloured.

use std::io;

use termcolor::{Buffer, Color, ColorSpec, WriteColor};
use unicode_width::UnicodeWidthStr;

use crate::diagnostics::InvalidMessage;
use crate::message::ErrorMessage;
use crate::options::RenderOptions;

// ============================================================================
// BULLETS
// ============================================================================

const SYMBOL_INFO: &str = "ℹ";
const SYMBOL_CROSS: &str = "✖";
const SYMBOL_ASCII: &str = "*";

/// The kind of bulleted line being written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bullet {
    Context,
    Fault,
    Hint,
}

impl Bullet {
    /// Prefix glyph, without the separating space.
    pub fn symbol(self, use_symbols: bool) -> &'static str {
        if !use_symbols {
            return SYMBOL_ASCII;
        }
        match self {
            Bullet::Context | Bullet::Hint => SYMBOL_INFO,
            Bullet::Fault => SYMBOL_CROSS,
        }
    }

    fn color(self) -> Color {
        match self {
            Bullet::Context | Bullet::Hint => Color::Blue,
            Bullet::Fault => Color::Red,
        }
    }
}

// ============================================================================
// COMPOSER
// ============================================================================

/// Renders [`ErrorMessage`]s with a fixed set of [`RenderOptions`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MessageComposer {
    options: RenderOptions,
}

impl MessageComposer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Produces the final text for one message.
    ///
    /// # Example
    /// ```rust
    /// use clarion::{ErrorMessage, MessageComposer, RenderOptions};
    ///
    /// let msg = ErrorMessage::builder("Must index an existing element")
    ///     .context("There are 26 elements.")
    ///     .fault("You've tried to subset element 100.")
    ///     .build()
    ///     .unwrap();
    /// let text = MessageComposer::new(RenderOptions::default()).render(&msg).unwrap();
    /// assert_eq!(
    ///     text,
    ///     "Must index an existing element:\nℹ There are 26 elements.\n✖ You've tried to subset element 100."
    /// );
    /// ```
    pub fn render(&self, message: &ErrorMessage) -> Result<String, InvalidMessage> {
        message.validate()?;
        let mut buf = if self.options.use_color {
            Buffer::ansi()
        } else {
            Buffer::no_color()
        };
        // Writes into an in-memory buffer cannot fail.
        let _ = self.write_message(&mut buf, message);
        Ok(String::from_utf8_lossy(buf.as_slice()).into_owned())
    }

    /// Renders several messages separated by a blank line.
    pub fn render_all<'a>(
        &self,
        messages: impl IntoIterator<Item = &'a ErrorMessage>,
    ) -> Result<String, InvalidMessage> {
        let rendered = messages
            .into_iter()
            .map(|msg| self.render(msg))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rendered.join("\n\n"))
    }

    fn write_message(&self, w: &mut impl WriteColor, message: &ErrorMessage) -> io::Result<()> {
        let opts = &self.options;
        let total = message.item_count();
        let shown = total.min(opts.max_items.get());
        let hidden = total - shown;
        let has_more = total > 0 || message.hint().is_some();

        w.set_color(ColorSpec::new().set_bold(true))?;
        write!(w, "{}", problem_line(message.problem(), has_more))?;
        w.reset()?;

        let items = message
            .context()
            .iter()
            .map(|item| (Bullet::Context, item.as_str()))
            .chain(message.fault().iter().map(|item| (Bullet::Fault, item.as_str())));
        for (bullet, text) in items.take(shown) {
            writeln!(w)?;
            self.write_bullet(w, bullet, text)?;
        }

        if hidden > 0 {
            log::debug!("truncated {} of {} items (max_items = {})", hidden, total, opts.max_items);
            writeln!(w)?;
            w.set_color(ColorSpec::new().set_dimmed(true))?;
            write!(w, "... and {} more problems", hidden)?;
            w.reset()?;
        }

        if let Some(hint) = message.hint() {
            writeln!(w)?;
            self.write_bullet(w, Bullet::Hint, hint)?;
        }
        Ok(())
    }

    fn write_bullet(&self, w: &mut impl WriteColor, bullet: Bullet, text: &str) -> io::Result<()> {
        let symbol = bullet.symbol(self.options.use_symbols);
        w.set_color(ColorSpec::new().set_fg(Some(bullet.color())))?;
        write!(w, "{}", symbol)?;
        w.reset()?;

        // Continuation lines line up under the first character of the text.
        let indent = " ".repeat(symbol.width() + 1);
        for (i, line) in text.trim_end().split('\n').map(str::trim_end).enumerate() {
            if i == 0 {
                write!(w, " {}", line)?;
            } else if line.is_empty() {
                writeln!(w)?;
            } else {
                write!(w, "\n{}{}", indent, line)?;
            }
        }
        Ok(())
    }
}

/// Renders one message. Shorthand for `MessageComposer::new(*options).render(message)`.
pub fn render(message: &ErrorMessage, options: &RenderOptions) -> Result<String, InvalidMessage> {
    MessageComposer::new(*options).render(message)
}

/// Normalises the statement's closing punctuation.
///
/// Trailing `.` and `:` are replaced by the connector; a statement that ends in
/// `?` or `!` keeps its own punctuation.
fn problem_line(problem: &str, has_more: bool) -> String {
    let trimmed = problem.trim_end();
    if trimmed.ends_with(['?', '!']) {
        return trimmed.to_string();
    }
    let stem = trimmed.trim_end_matches(['.', ':']).trim_end();
    let connector = if has_more { ':' } else { '.' };
    format!("{}{}", stem, connector)
}
