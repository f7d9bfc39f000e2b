//! CLI command handler that bridges parsed arguments to the library run
//!
//! Every error the library run returns is fatal: it is printed as a `[!]` line
//! and the process exits with status 1. Only failures to report at all escape
//! as `anyhow` errors.

use crate::cli_bin::args::ParsedArgs;
use anyhow::{Context, Result};
use autodemo::error::AutodemoError;
use autodemo::io::{FsProbe, Provenance, Reporter};
use autodemo::ops::{self, RunSummary};
use log::{debug, error, warn};
use std::io::Write;
use std::process::ExitCode;

/// Execute a run against the real filesystem and process streams
pub fn execute(args: ParsedArgs) -> Result<ExitCode> {
    let mut reporter = Reporter::stdio();
    execute_with(args, &mut reporter)
}

/// Execute a run, reporting through `reporter`
pub fn execute_with<O: Write, E: Write>(
    args: ParsedArgs,
    reporter: &mut Reporter<O, E>,
) -> Result<ExitCode> {
    debug!("Executing with unknown tokens: {:?}", args.unknown);

    match classify_targets(args, reporter) {
        Ok(summary) => {
            if summary.invalid() > 0 {
                warn!("{} invalid targets", summary.invalid());
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            error!("{}", err);
            reporter
                .error(&err.to_string())
                .and_then(|()| reporter.flush())
                .context("failed to report error")?;
            Ok(ExitCode::from(1))
        }
    }
}

fn classify_targets<O: Write, E: Write>(
    args: ParsedArgs,
    reporter: &mut Reporter<O, E>,
) -> Result<RunSummary, AutodemoError> {
    let invocation = args.into_invocation();
    let provenance = Provenance::detect()?;
    ops::run(&invocation, &provenance, reporter, &FsProbe::new())
}
