//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

use corerank_core::config::{CliOverrides, ShortfallPolicy};

/// Extract keywords from each line of a document with CoreRank.
#[derive(Parser, Clone, Debug)]
#[command(name = "corerank", author, version, about, long_about = None)]
pub struct CliArgs {
    /// Input file, one document per line
    #[arg(value_name = "DOCUMENT")]
    pub document: PathBuf,

    /// Output file, one line of space-separated keywords per document
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Sliding window size for the graph of words
    #[arg(short = 'w', long)]
    pub window_size: Option<usize>,

    /// Penalty per missing edge among the keywords
    #[arg(short = 'l', long, allow_negative_numbers = true)]
    pub lambda: Option<f64>,

    /// Number of keywords per document
    #[arg(short = 'k', long)]
    pub keywords: Option<usize>,

    /// What to do when a line runs out of positive-gain words (abort, skip, partial)
    #[arg(long, value_name = "POLICY")]
    pub on_shortfall: Option<ShortfallPolicy>,

    /// Config file used in place of ./corerank.toml
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Also write a JSON processing report to this file
    #[arg(long, value_name = "FILE")]
    pub report: Option<PathBuf>,
}

impl CliArgs {
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            window_size: self.window_size,
            lambda: self.lambda,
            keywords: self.keywords,
            on_shortfall: self.on_shortfall,
        }
    }
}
