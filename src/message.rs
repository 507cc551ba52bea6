//! The validated `ErrorMessage` value and its builder.
//!
//! An `ErrorMessage` is built once at the error site, handed to the composer
//! and dropped. Its fields are private so a built message can only be read,
//! never mutated into an invalid state.

use serde::{Deserialize, Serialize};

use crate::diagnostics::{InvalidKind, InvalidMessage, ItemGroup};

/// A problem statement with its contextual and faulty-input bullets.
///
/// # Example
/// ```rust
/// use clarion::ErrorMessage;
///
/// let msg = ErrorMessage::builder("Must index an existing element")
///     .context("There are 26 elements.")
///     .fault("You've tried to subset element 100.")
///     .build()
///     .unwrap();
/// assert_eq!(msg.item_count(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "MessageRecord", into = "MessageRecord")]
pub struct ErrorMessage {
    problem: String,
    context: Vec<String>,
    fault: Vec<String>,
    hint: Option<String>,
}

impl ErrorMessage {
    /// Creates a message with a problem statement and no bullets.
    pub fn new(problem: impl Into<String>) -> Result<Self, InvalidMessage> {
        Self::builder(problem).build()
    }

    /// Starts a builder. Nothing is validated until [`MessageBuilder::build`].
    pub fn builder(problem: impl Into<String>) -> MessageBuilder {
        MessageBuilder {
            problem: problem.into(),
            context: Vec::new(),
            fault: Vec::new(),
            hint: None,
        }
    }

    pub fn problem(&self) -> &str {
        &self.problem
    }

    pub fn context(&self) -> &[String] {
        &self.context
    }

    pub fn fault(&self) -> &[String] {
        &self.fault
    }

    pub fn hint(&self) -> Option<&str> {
        self.hint.as_deref()
    }

    /// Number of context and fault items together. The hint is not counted.
    pub fn item_count(&self) -> usize {
        self.context.len() + self.fault.len()
    }

    /// Re-checks every construction rule.
    ///
    /// Built messages always pass; the composer calls this so that rendering
    /// and construction reject exactly the same inputs.
    pub fn validate(&self) -> Result<(), InvalidMessage> {
        validate_parts(&self.problem, &self.context, &self.fault, self.hint.as_deref())
    }
}

/// Accumulates the parts of an [`ErrorMessage`].
#[derive(Debug, Clone, Default)]
pub struct MessageBuilder {
    problem: String,
    context: Vec<String>,
    fault: Vec<String>,
    hint: Option<String>,
}

impl MessageBuilder {
    /// Appends a contextual item (rendered with `ℹ`).
    pub fn context(mut self, item: impl Into<String>) -> Self {
        self.context.push(item.into());
        self
    }

    /// Appends a faulty-input item (rendered with `✖`).
    pub fn fault(mut self, item: impl Into<String>) -> Self {
        self.fault.push(item.into());
        self
    }

    /// Sets the hint, replacing any earlier one.
    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn build(self) -> Result<ErrorMessage, InvalidMessage> {
        validate_parts(&self.problem, &self.context, &self.fault, self.hint.as_deref())?;
        Ok(ErrorMessage {
            problem: self.problem,
            context: self.context,
            fault: self.fault,
            hint: self.hint,
        })
    }
}

fn validate_parts(
    problem: &str,
    context: &[String],
    fault: &[String],
    hint: Option<&str>,
) -> Result<(), InvalidMessage> {
    // `.` and `:` are replaced by the connector when rendering, so they alone
    // do not make a statement.
    if problem.trim_end().trim_end_matches(['.', ':']).trim().is_empty() {
        return Err(InvalidKind::EmptyProblem.into());
    }
    for (group, items) in [(ItemGroup::Context, context), (ItemGroup::Fault, fault)] {
        if let Some(pos) = items.iter().position(|item| item.trim().is_empty()) {
            return Err(InvalidKind::EmptyItem {
                group,
                index: pos + 1,
            }
            .into());
        }
    }
    if let Some(hint) = hint {
        if !hint.trim_end().ends_with('?') {
            return Err(InvalidKind::HintNotQuestion.into());
        }
    }
    Ok(())
}

/// On-disk shape of a message. Unknown fields are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MessageRecord {
    pub problem: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub context: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fault: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl TryFrom<MessageRecord> for ErrorMessage {
    type Error = InvalidMessage;

    fn try_from(record: MessageRecord) -> Result<Self, Self::Error> {
        let mut builder = ErrorMessage::builder(record.problem);
        builder.context = record.context;
        builder.fault = record.fault;
        builder.hint = record.hint;
        builder.build()
    }
}

impl From<ErrorMessage> for MessageRecord {
    fn from(msg: ErrorMessage) -> Self {
        MessageRecord {
            problem: msg.problem,
            context: msg.context,
            fault: msg.fault,
            hint: msg.hint,
        }
    }
}
