//! Loading messages from YAML or JSON documents.
//!
//! A document holds either one message record or a sequence of them:
//!
//! ```yaml
//! - problem: Must index an existing element
//!   context: [There are 26 elements.]
//!   fault: [You've tried to subset element 100.]
//! - problem: Can't find column `b`
//!   hint: Did you mean `c`?
//! ```

use std::fs;
use std::path::Path;

use crate::diagnostics::ClarionError;
use crate::message::{ErrorMessage, MessageRecord};

/// Serialization format of a message document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Yaml,
    Json,
}

impl Format {
    /// `.json` files are JSON; everything else is read as YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Format::Json,
            _ => Format::Yaml,
        }
    }
}

/// Decodes raw records without validating them.
///
/// The document is read as a generic value first so a sequence and a single
/// record can be told apart without losing serde's error for a bad field.
/// Errors inside a sequence name the 1-based record they come from.
pub fn parse_records(content: &str, format: Format) -> Result<Vec<MessageRecord>, String> {
    match format {
        Format::Yaml => {
            let value: serde_yaml::Value = serde_yaml::from_str(content).map_err(|e| e.to_string())?;
            match value {
                serde_yaml::Value::Sequence(items) => items
                    .into_iter()
                    .enumerate()
                    .map(|(i, item)| serde_yaml::from_value::<MessageRecord>(item).map_err(|e| record_error(i, e)))
                    .collect(),
                other => Ok(vec![serde_yaml::from_value::<MessageRecord>(other).map_err(|e| e.to_string())?]),
            }
        }
        Format::Json => {
            let value: serde_json::Value = serde_json::from_str(content).map_err(|e| e.to_string())?;
            match value {
                serde_json::Value::Array(items) => items
                    .into_iter()
                    .enumerate()
                    .map(|(i, item)| serde_json::from_value::<MessageRecord>(item).map_err(|e| record_error(i, e)))
                    .collect(),
                other => Ok(vec![serde_json::from_value::<MessageRecord>(other).map_err(|e| e.to_string())?]),
            }
        }
    }
}

fn record_error(index: usize, err: impl std::fmt::Display) -> String {
    format!("message {}: {}", index + 1, err)
}

/// Reads a document and validates every message in it.
///
/// Invalid records are reported with their 1-based position.
pub fn load_messages(path: impl AsRef<Path>) -> Result<Vec<ErrorMessage>, ClarionError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| ClarionError::io(path, e))?;
    let format = Format::from_path(path);
    let records = parse_records(&content, format).map_err(|e| ClarionError::decode(path, e))?;
    log::debug!("decoded {} record(s) from {} as {:?}", records.len(), path.display(), format);

    records
        .into_iter()
        .enumerate()
        .map(|(i, record)| {
            ErrorMessage::try_from(record).map_err(|source| ClarionError::InvalidRecord {
                path: path.to_path_buf(),
                index: i + 1,
                source,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::InvalidKind;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(Format::from_path(Path::new("a.json")), Format::Json);
        assert_eq!(Format::from_path(Path::new("a.JSON")), Format::Json);
        assert_eq!(Format::from_path(Path::new("a.yaml")), Format::Yaml);
        assert_eq!(Format::from_path(Path::new("messages")), Format::Yaml);
    }

    #[test]
    fn test_single_record_document() {
        let records = parse_records("problem: Oops\nfault: [x is 1.]\n", Format::Yaml).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].fault, vec!["x is 1.".to_string()]);
    }

    #[test]
    fn test_sequence_document_json() {
        let records = parse_records(
            r#"[{"problem": "A"}, {"problem": "B", "hint": "Why?"}]"#,
            Format::Json,
        )
        .unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].hint.as_deref(), Some("Why?"));
    }

    #[test]
    fn test_unknown_field_fails_to_decode() {
        assert!(parse_records("problem: A\nwarning: B\n", Format::Yaml).is_err());
    }

    #[test]
    fn test_decode_error_names_field_and_record() {
        let err = parse_records("- problem: A\n- problem: B\n  hnt: Why?\n", Format::Yaml).unwrap_err();
        assert!(err.contains("unknown field `hnt`"), "{err}");
        assert!(err.starts_with("message 2:"), "{err}");

        let err = parse_records(r#"[{"problem": "A"}, {"problem": "B", "hnt": "Why?"}]"#, Format::Json)
            .unwrap_err();
        assert!(err.contains("unknown field `hnt`"), "{err}");
        assert!(err.starts_with("message 2:"), "{err}");
    }

    #[test]
    fn test_single_record_decode_error_names_field() {
        let err = parse_records("problem: A\nhnt: Why?\n", Format::Yaml).unwrap_err();
        assert!(err.contains("unknown field `hnt`"), "{err}");
        let err = parse_records(r#"{"hint": "Why?"}"#, Format::Json).unwrap_err();
        assert!(err.contains("missing field `problem`"), "{err}");
    }

    #[test]
    fn test_load_reports_invalid_record_index() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("messages.yaml");
        fs::write(&path, "- problem: Fine\n- problem: Bad\n  hint: Use c instead.\n").unwrap();
        match load_messages(&path).unwrap_err() {
            ClarionError::InvalidRecord { index, source, .. } => {
                assert_eq!(index, 2);
                assert_eq!(source.kind, InvalidKind::HintNotQuestion);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_messages("does/not/exist.yaml").unwrap_err();
        assert!(matches!(err, ClarionError::Io { .. }));
    }
}
