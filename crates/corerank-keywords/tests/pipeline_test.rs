//! Line and document pipeline tests, including the shortfall policy.

use corerank_core::config::{ExtractionConfig, ExtractionParams, ShortfallPolicy};
use corerank_core::errors::{CorerankErrorCode, PipelineError, SelectionError};
use corerank_keywords::{
    format_keywords, process_document, process_document_with, process_line, tokenize,
};

fn params(keywords: usize, on_shortfall: ShortfallPolicy) -> ExtractionParams {
    ExtractionParams {
        keywords,
        on_shortfall,
        ..ExtractionParams::default()
    }
}

#[test]
fn test_tokenize_splits_on_any_whitespace() {
    assert_eq!(tokenize("  a\tb  c\n"), vec!["a", "b", "c"]);
    assert!(tokenize("   ").is_empty());
}

#[test]
fn test_process_line_returns_sorted_keywords() {
    let tokens = tokenize("the cat sat on the mat");
    let keywords = process_line(&tokens, &ExtractionParams::default()).unwrap();
    assert_eq!(keywords, vec!["cat", "on", "the"]);
    assert_eq!(format_keywords(&keywords), "cat on the");
}

#[test]
fn test_process_line_rejects_zero_window() {
    let bad = ExtractionParams {
        window_size: 0,
        ..ExtractionParams::default()
    };
    let err = process_line(&["a", "b"], &bad).unwrap_err();
    assert!(matches!(err, SelectionError::Graph(_)));
}

#[test]
fn test_params_resolve_from_config() {
    let config = ExtractionConfig {
        window_size: Some(2),
        keywords: Some(2),
        ..Default::default()
    };
    let keywords = process_line(&tokenize("a b c d"), &config.resolve()).unwrap();
    assert_eq!(keywords, vec!["b", "c"]);
}

#[test]
fn test_document_skips_blank_lines() {
    let lines = ["the cat sat on the mat", "", "   ", "a b c a b c"];
    let report = process_document(lines, &ExtractionParams::default()).unwrap();

    assert_eq!(report.processed, 2);
    assert_eq!(report.blank, 2);
    assert_eq!(report.outputs.len(), 2);
    assert_eq!(report.outputs[0].line, 1);
    assert_eq!(report.outputs[1].line, 4);
    let lines: Vec<String> = report.output_lines().collect();
    assert_eq!(lines, vec!["cat on the", "a b c"]);
}

#[test]
fn test_abort_policy_surfaces_line_number() {
    let lines = ["the cat sat on the mat", "lonely"];
    let err = process_document(lines, &params(3, ShortfallPolicy::Abort)).unwrap_err();
    match err {
        PipelineError::Selection { line, ref source } => {
            assert_eq!(line, 2);
            assert!(source.is_shortfall());
        }
        ref other => panic!("Expected Selection error, got: {:?}", other),
    }
    assert_eq!(err.error_code(), "NO_POSITIVE_GAIN");
}

#[test]
fn test_sink_sees_lines_finished_before_abort() {
    let lines = ["the cat sat on the mat", "", "lonely", "a b c"];
    let mut written = Vec::new();
    let err = process_document_with(lines, &params(3, ShortfallPolicy::Abort), |output| {
        written.push(output.keywords.join(" "));
        Ok(())
    })
    .unwrap_err();

    assert!(matches!(err, PipelineError::Selection { line: 3, .. }));
    assert_eq!(written, vec!["cat on the"]);
}

#[test]
fn test_sink_error_stops_processing() {
    let lines = ["the cat sat on the mat", "a b c"];
    let mut calls = 0;
    let err = process_document_with(lines, &params(3, ShortfallPolicy::Abort), |_| {
        calls += 1;
        Err(PipelineError::io(
            "out.txt",
            std::io::Error::new(std::io::ErrorKind::Other, "disk full"),
        ))
    })
    .unwrap_err();

    assert_eq!(calls, 1);
    assert_eq!(err.error_code(), "IO_ERROR");
}

#[test]
fn test_zero_keywords_yields_empty_outputs() {
    let report = process_document(["the cat sat on the mat", "lonely"], &params(0, ShortfallPolicy::Abort)).unwrap();
    assert_eq!(report.processed, 2);
    assert!(report.outputs.iter().all(|o| o.keywords.is_empty()));
}

#[test]
fn test_skip_policy_drops_line() {
    let lines = ["lonely", "the cat sat on the mat"];
    let report = process_document(lines, &params(3, ShortfallPolicy::Skip)).unwrap();
    assert_eq!(report.skipped, 1);
    assert_eq!(report.outputs.len(), 1);
    assert_eq!(report.outputs[0].line, 2);
    assert!(!report.outputs[0].partial);
}

#[test]
fn test_partial_policy_keeps_chosen_words() {
    let lines = ["a b", "x"];
    let report = process_document(lines, &params(3, ShortfallPolicy::Partial)).unwrap();
    assert_eq!(report.partial, 2);
    assert_eq!(report.outputs[0].keywords, vec!["a", "b"]);
    assert!(report.outputs[0].partial);
    // Nothing had positive gain, so the partial set is empty.
    assert!(report.outputs[1].keywords.is_empty());
}

#[test]
fn test_non_shortfall_errors_always_abort() {
    let bad = ExtractionParams {
        window_size: 0,
        on_shortfall: ShortfallPolicy::Skip,
        ..ExtractionParams::default()
    };
    let err = process_document(["a b c"], &bad).unwrap_err();
    assert_eq!(err.error_code(), "GRAPH_ERROR");
}

#[test]
fn test_lines_are_independent() {
    let alone = process_document(["the cat sat on the mat"], &ExtractionParams::default()).unwrap();
    let after_other = process_document(
        ["a b c a b c", "the cat sat on the mat"],
        &ExtractionParams::default(),
    )
    .unwrap();
    assert_eq!(alone.outputs[0].keywords, after_other.outputs[1].keywords);
}

#[test]
fn test_report_serializes_to_json() {
    let report = process_document(["a b c a b c"], &ExtractionParams::default()).unwrap();
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["processed"], 1);
    assert_eq!(json["outputs"][0]["keywords"], serde_json::json!(["a", "b", "c"]));
    assert_eq!(json["outputs"][0]["partial"], false);
}
