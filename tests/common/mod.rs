//! # Clarion Test Helpers
//!
//! Shared helpers for the integration tests: ANSI stripping, bullet counting
//! and the YAML golden-case loader.

#![allow(dead_code)]

use std::fs;
use std::num::NonZeroUsize;
use std::path::Path;

use clarion::message::MessageRecord;
use clarion::RenderOptions;
use serde::Deserialize;

/// Removes ANSI SGR sequences (`ESC [ ... m`).
pub fn strip_ansi(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\x1b' && chars.peek() == Some(&'[') {
            for c in chars.by_ref() {
                if c == 'm' {
                    break;
                }
            }
            continue;
        }
        out.push(c);
    }
    out
}

/// Lines that start with a bullet prefix, in output order.
pub fn bulleted_lines(text: &str) -> Vec<&str> {
    text.lines()
        .filter(|l| l.starts_with("ℹ ") || l.starts_with("✖ ") || l.starts_with("* "))
        .collect()
}

/// Options block of a golden case. Missing keys fall back to the defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CaseOptions {
    #[serde(default)]
    pub ascii: bool,
    #[serde(default)]
    pub color: bool,
    pub max_items: Option<NonZeroUsize>,
}

impl CaseOptions {
    pub fn to_render_options(&self) -> RenderOptions {
        let mut opts = RenderOptions::default()
            .with_symbols(!self.ascii)
            .with_color(self.color);
        if let Some(max) = self.max_items {
            opts = opts.with_max_items(max);
        }
        opts
    }
}

/// A single golden-master case.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GoldenCase {
    pub name: String,
    pub message: MessageRecord,
    #[serde(default)]
    pub options: CaseOptions,
    /// Exact expected output.
    pub expected: Option<String>,
    /// Substring of the expected `InvalidMessage` text.
    pub expect_error: Option<String>,
}

/// Loads golden cases from a YAML suite file.
pub fn load_cases(path: &Path) -> Vec<GoldenCase> {
    let content = fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e));
    serde_yaml::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse YAML in {}: {}", path.display(), e))
}
