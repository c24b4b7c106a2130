//! Reads the document, runs the pipeline, writes the outputs.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::{debug, info};

use corerank_core::config::CorerankConfig;
use corerank_core::errors::{ConfigError, PipelineError};
use corerank_keywords::{process_document_with, DocumentReport};

use crate::args::CliArgs;

pub fn run(args: &CliArgs) -> Result<DocumentReport, PipelineError> {
    let config = load_config(args)?;
    let params = config.extraction.resolve();
    debug!(
        window = params.window_size,
        lambda = params.lambda,
        keywords = params.keywords,
        on_shortfall = %params.on_shortfall,
        "resolved extraction parameters"
    );

    let text = fs::read_to_string(&args.document).map_err(|e| io_error(&args.document, e))?;
    let file = File::create(&args.output).map_err(|e| io_error(&args.output, e))?;
    let mut out = BufWriter::new(file);

    // Lines finished before an aborting error are flushed too.
    let processed = process_document_with(text.lines(), &params, |output| {
        writeln!(out, "{}", output.keywords.join(" ")).map_err(|e| io_error(&args.output, e))
    });
    out.flush().map_err(|e| io_error(&args.output, e))?;
    let report = processed?;

    if let Some(path) = &args.report {
        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| io_error(path, std::io::Error::other(e)))?;
        fs::write(path, json).map_err(|e| io_error(path, e))?;
    }

    info!(
        processed = report.processed,
        blank = report.blank,
        skipped = report.skipped,
        partial = report.partial,
        "wrote {}",
        args.output.display()
    );
    Ok(report)
}

fn load_config(args: &CliArgs) -> Result<CorerankConfig, PipelineError> {
    let overrides = args.overrides();
    let config = match &args.config {
        Some(path) => {
            if !path.is_file() {
                return Err(ConfigError::FileNotFound {
                    path: path.display().to_string(),
                }
                .into());
            }
            let user = CorerankConfig::user_config_path();
            CorerankConfig::load_layers(user.as_deref(), path, Some(&overrides))?
        }
        None => {
            let root = std::env::current_dir().map_err(|e| io_error(Path::new("."), e))?;
            CorerankConfig::load(&root, Some(&overrides))?
        }
    };
    Ok(config)
}

fn io_error(path: &Path, source: std::io::Error) -> PipelineError {
    PipelineError::io(path.display().to_string(), source)
}
