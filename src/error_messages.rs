//!
//! Centralized error message constants for the crate.
//!
//! This module provides a single source of truth for the texts behind
//! `InvalidMessage` and the help lines attached to every diagnostic,
//! organized by functional area.
//!
//! # Usage
//!
//! ```rust
//! use clarion::error_messages::ERROR_EMPTY_ITEM;
//!
//! let text = ERROR_EMPTY_ITEM.replacen("{}", "Context", 1).replacen("{}", "2", 1);
//! assert_eq!(text, "Context item 2 must not be empty.");
//! ```

// ============================================================================
// MESSAGE CONSTRUCTION ERRORS
// ============================================================================

pub const ERROR_EMPTY_PROBLEM: &str = "Problem statement must not be empty.";
pub const ERROR_EMPTY_ITEM: &str = "{} item {} must not be empty.";
pub const ERROR_HINT_NOT_QUESTION: &str = "Hint must be phrased as a question ending in `?`.";

pub const HELP_EMPTY_PROBLEM: &str = "State what went wrong in one short sentence.";
pub const HELP_EMPTY_ITEM: &str = "Drop the bullet or give it one short sentence.";
pub const HELP_HINT_NOT_QUESTION: &str = "Rephrase the hint, e.g. \"Did you mean `x`?\"";

// ============================================================================
// DOCUMENT & CONFIG ERRORS
// ============================================================================

pub const HELP_FILE_READ: &str = "Check that the path exists and is readable.";
pub const HELP_DECODE: &str =
    "Documents are YAML (or JSON for `.json` files) with `problem`, `context`, `fault` and `hint` fields.";
pub const HELP_CONFIG: &str = "Config keys are `color`, `symbols` (auto, always, never) and `max_items` (1 or more).";
