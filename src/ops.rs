//! The run sequence
//!
//! provenance → flag → non-empty check → count → one line per target.
//! Fatal errors are returned to the caller unprinted; invalid targets are
//! reported inline and recorded in the [`RunSummary`].

use crate::core::{Classified, Invocation, TargetKind};
use crate::error::{AutodemoError, Result};
use crate::io::{Probe, Provenance, Reporter};
use log::{debug, info};
use std::io::Write;

/// Outcome of a completed run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub classified: Vec<Classified>,
}

impl RunSummary {
    pub fn count(&self, kind: TargetKind) -> usize {
        self.classified.iter().filter(|c| c.kind == kind).count()
    }

    pub fn invalid(&self) -> usize {
        self.classified.iter().filter(|c| !c.kind.is_valid()).count()
    }
}

/// Report provenance and the flag, then classify every target
pub fn run<P, O, E>(
    invocation: &Invocation,
    provenance: &Provenance,
    reporter: &mut Reporter<O, E>,
    probe: &P,
) -> Result<RunSummary>
where
    P: Probe + ?Sized,
    O: Write,
    E: Write,
{
    debug!("running with {:?}", invocation);
    debug!("script directory: {}", provenance.script_dir().display());

    reporter.write(
        &format!("Script lives at: {}", provenance.script_path().display()),
        false,
    )?;
    reporter.write(
        &format!("Called from:     {}", provenance.call_dir().display()),
        false,
    )?;

    if invocation.flag() {
        reporter.write("-f / --flag is active.", true)?;
    }

    if invocation.is_empty() {
        return Err(AutodemoError::NoTargets);
    }
    reporter.write(&format!("{} targets provided", invocation.len()), false)?;

    let mut summary = RunSummary::default();
    for target in invocation.targets() {
        let kind = TargetKind::classify(probe, target);
        let classified = Classified::new(target.clone(), kind, invocation.is_special(target));
        reporter.classified(&classified)?;
        summary.classified.push(classified);
    }
    reporter.flush()?;

    info!(
        "classified {} targets ({} invalid)",
        summary.classified.len(),
        summary.invalid()
    );
    Ok(summary)
}
