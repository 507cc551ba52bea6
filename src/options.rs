//! Render options and terminal capability detection.
//!
//! Capability detection never feeds into rendering directly: callers collect
//! a [`TerminalCaps`] once, resolve it against their [`Mode`] choices and pass
//! the resulting [`RenderOptions`] value into the composer.

use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

/// Default cap on bulleted items before the aggregate line takes over.
pub const DEFAULT_MAX_ITEMS: NonZeroUsize = match NonZeroUsize::new(5) {
    Some(n) => n,
    None => unreachable!(),
};

/// How a single rendering feature is chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Follow the detected terminal capability.
    #[default]
    Auto,
    Always,
    Never,
}

impl Mode {
    /// Resolves to a boolean; `detected` only matters for `Auto`.
    pub fn resolve(self, detected: bool) -> bool {
        match self {
            Mode::Auto => detected,
            Mode::Always => true,
            Mode::Never => false,
        }
    }
}

/// Final, fully resolved rendering choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// `ℹ`/`✖` bullets when true, ASCII `*` otherwise.
    pub use_symbols: bool,
    /// Emit ANSI colour sequences.
    pub use_color: bool,
    /// Bulleted items shown before the aggregate line.
    pub max_items: NonZeroUsize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            use_symbols: true,
            use_color: false,
            max_items: DEFAULT_MAX_ITEMS,
        }
    }
}

impl RenderOptions {
    /// Plain ASCII, no colour.
    pub fn plain() -> Self {
        Self {
            use_symbols: false,
            ..Self::default()
        }
    }

    /// Defaults resolved against the current process environment.
    pub fn detect() -> Self {
        Self::resolve(Mode::Auto, Mode::Auto, DEFAULT_MAX_ITEMS, &TerminalCaps::detect())
    }

    pub fn resolve(color: Mode, symbols: Mode, max_items: NonZeroUsize, caps: &TerminalCaps) -> Self {
        Self {
            use_symbols: symbols.resolve(caps.utf8),
            use_color: color.resolve(caps.is_tty && !caps.no_color),
            max_items,
        }
    }

    pub fn with_symbols(mut self, use_symbols: bool) -> Self {
        self.use_symbols = use_symbols;
        self
    }

    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }

    pub fn with_max_items(mut self, max_items: NonZeroUsize) -> Self {
        self.max_items = max_items;
        self
    }
}

/// What the output terminal can show.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TerminalCaps {
    pub is_tty: bool,
    pub utf8: bool,
    /// `NO_COLOR` is set to a non-empty value.
    pub no_color: bool,
}

impl TerminalCaps {
    /// Capabilities of stderr, where error messages usually end up.
    pub fn detect() -> Self {
        Self::detect_stream(atty::Stream::Stderr)
    }

    /// Reads the TTY status of `stream` and the locale/colour environment variables.
    pub fn detect_stream(stream: atty::Stream) -> Self {
        let caps = Self::from_env(atty::is(stream), |key| std::env::var(key).ok());
        log::debug!("detected terminal capabilities: {:?}", caps);
        caps
    }

    /// Builds capabilities from a TTY flag and an environment lookup.
    pub fn from_env(is_tty: bool, var: impl Fn(&str) -> Option<String>) -> Self {
        let set = |key: &str| var(key).filter(|v| !v.is_empty());
        let locale = ["LC_ALL", "LC_CTYPE", "LANG"].into_iter().find_map(|key| set(key));
        let utf8 = cfg!(windows)
            || locale.is_some_and(|l| {
                let l = l.to_ascii_lowercase();
                l.contains("utf-8") || l.contains("utf8")
            });
        Self {
            is_tty,
            utf8,
            no_color: set("NO_COLOR").is_some(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn caps(is_tty: bool, vars: &[(&str, &str)]) -> TerminalCaps {
        let env: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        TerminalCaps::from_env(is_tty, |key| env.get(key).cloned())
    }

    #[test]
    fn test_locale_precedence() {
        let c = caps(false, &[("LC_ALL", "en_US.UTF-8"), ("LANG", "C")]);
        assert!(c.utf8);
        let c = caps(false, &[("LC_ALL", ""), ("LC_CTYPE", "C"), ("LANG", "en_US.utf8")]);
        assert_eq!(c.utf8, cfg!(windows));
    }

    #[test]
    fn test_no_color_disables_auto_color_only() {
        let c = caps(true, &[("LANG", "en_US.UTF-8"), ("NO_COLOR", "1")]);
        let auto = RenderOptions::resolve(Mode::Auto, Mode::Auto, DEFAULT_MAX_ITEMS, &c);
        assert!(!auto.use_color);
        assert!(auto.use_symbols);
        let forced = RenderOptions::resolve(Mode::Always, Mode::Never, DEFAULT_MAX_ITEMS, &c);
        assert!(forced.use_color);
        assert!(!forced.use_symbols);
    }

    #[test]
    fn test_auto_color_follows_tty() {
        let tty = caps(true, &[]);
        let pipe = caps(false, &[]);
        assert!(RenderOptions::resolve(Mode::Auto, Mode::Auto, DEFAULT_MAX_ITEMS, &tty).use_color);
        assert!(!RenderOptions::resolve(Mode::Auto, Mode::Auto, DEFAULT_MAX_ITEMS, &pipe).use_color);
    }

    #[test]
    fn test_defaults() {
        let opts = RenderOptions::default();
        assert!(opts.use_symbols);
        assert!(!opts.use_color);
        assert_eq!(opts.max_items.get(), 5);
        assert!(!RenderOptions::plain().use_symbols);
    }
}
