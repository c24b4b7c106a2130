//! Multi-line documents: blank-line skipping and the shortfall policy.

use serde::Serialize;
use tracing::{debug, warn};

use corerank_core::config::{ExtractionParams, ShortfallPolicy};
use corerank_core::errors::{PipelineError, SelectionError};

use super::line::{process_line, tokenize};

/// Keywords for one input line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineOutput {
    /// 1-based line number in the input.
    pub line: usize,
    /// Sorted keywords.
    pub keywords: Vec<String>,
    /// True when the shortfall policy cut the set short.
    pub partial: bool,
}

/// Result of processing every line of a document.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DocumentReport {
    pub outputs: Vec<LineOutput>,
    /// Non-blank lines seen.
    pub processed: usize,
    pub blank: usize,
    /// Lines dropped by `ShortfallPolicy::Skip`.
    pub skipped: usize,
    /// Lines emitted short by `ShortfallPolicy::Partial`.
    pub partial: usize,
}

impl DocumentReport {
    /// Output lines in input order.
    pub fn output_lines(&self) -> impl Iterator<Item = String> + '_ {
        self.outputs.iter().map(|o| o.keywords.join(" "))
    }
}

/// Extract keywords from every line of a document.
///
/// Blank lines are skipped. `NoPositiveGain` is handled per
/// `params.on_shortfall`; any other error aborts.
pub fn process_document<I, S>(lines: I, params: &ExtractionParams) -> Result<DocumentReport, PipelineError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    process_document_with(lines, params, |_| Ok(()))
}

/// Like `process_document`, but hands each output to `sink` as soon as its
/// line is done. Outputs delivered before an aborting error stay delivered.
pub fn process_document_with<I, S, F>(
    lines: I,
    params: &ExtractionParams,
    mut sink: F,
) -> Result<DocumentReport, PipelineError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    F: FnMut(&LineOutput) -> Result<(), PipelineError>,
{
    let mut report = DocumentReport::default();

    for (index, raw) in lines.into_iter().enumerate() {
        let line_number = index + 1;
        let tokens = tokenize(raw.as_ref());
        if tokens.is_empty() {
            report.blank += 1;
            continue;
        }
        report.processed += 1;

        match process_line(&tokens, params) {
            Ok(keywords) => {
                let output = LineOutput {
                    line: line_number,
                    keywords,
                    partial: false,
                };
                sink(&output)?;
                report.outputs.push(output);
            }
            Err(SelectionError::NoPositiveGain { round, selected, .. })
                if params.on_shortfall != ShortfallPolicy::Abort =>
            {
                match params.on_shortfall {
                    ShortfallPolicy::Partial => {
                        warn!(line = line_number, round, kept = selected.len(), "emitting partial keyword set");
                        report.partial += 1;
                        let output = LineOutput {
                            line: line_number,
                            keywords: selected,
                            partial: true,
                        };
                        sink(&output)?;
                        report.outputs.push(output);
                    }
                    _ => {
                        warn!(line = line_number, round, "skipping line with no positive-gain keyword");
                        report.skipped += 1;
                    }
                }
            }
            Err(e) => return Err(PipelineError::selection(line_number, e)),
        }
    }

    debug!(
        processed = report.processed,
        blank = report.blank,
        skipped = report.skipped,
        partial = report.partial,
        "document processed"
    );
    Ok(report)
}
