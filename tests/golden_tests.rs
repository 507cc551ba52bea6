//! Golden master tests for rendered messages.
//!
//! Each case in `tests/suites/render.yaml` either renders to an exact string
//! or fails construction with a matching `InvalidMessage`.

mod common;

use std::path::Path;

use clarion::{ErrorMessage, MessageComposer};
use common::{load_cases, GoldenCase};

fn run_case(case: GoldenCase) -> Result<(), String> {
    let composer = MessageComposer::new(case.options.to_render_options());
    let built = ErrorMessage::try_from(case.message);
    match (built, case.expected, case.expect_error) {
        (Ok(msg), Some(expected), None) => {
            let actual = composer.render(&msg).map_err(|e| format!("render failed: {e}"))?;
            if actual == expected {
                Ok(())
            } else {
                Err(format!("expected:\n{expected}\nactual:\n{actual}"))
            }
        }
        (Err(err), None, Some(needle)) => {
            if err.to_string().contains(&needle) {
                Ok(())
            } else {
                Err(format!("error `{err}` does not contain `{needle}`"))
            }
        }
        (Ok(_), None, Some(needle)) => Err(format!("expected an error containing `{needle}`")),
        (Err(err), Some(_), None) => Err(format!("unexpected error: {err}")),
        _ => Err("case must set exactly one of `expected` or `expect_error`".to_string()),
    }
}

#[test]
fn test_render_suite() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/suites/render.yaml");
    let cases = load_cases(&path);
    assert!(!cases.is_empty());

    let failures: Vec<String> = cases
        .into_iter()
        .filter_map(|case| {
            let name = case.name.clone();
            run_case(case).err().map(|why| format!("[{name}] {why}"))
        })
        .collect();

    assert!(failures.is_empty(), "golden failures:\n{}", failures.join("\n\n"));
}
