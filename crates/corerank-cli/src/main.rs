//! `corerank` binary: keyword extraction over line-per-document files.

mod args;
mod run;

use std::process::ExitCode;

use clap::Parser;
use corerank_core::errors::CorerankErrorCode;
use corerank_core::tracing::init_tracing;

use crate::args::CliArgs;

fn main() -> ExitCode {
    let args = CliArgs::parse();
    init_tracing();

    match run::run(&args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e.tagged_string());
            ExitCode::FAILURE
        }
    }
}
