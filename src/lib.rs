//! autodemo: classify command-line targets as files, directories or links
//!
//! The library holds everything a run needs apart from the command-line
//! surface itself: target list normalization, first-match-wins
//! classification, status line output and provenance lookup.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use autodemo::{FsProbe, Invocation, Provenance, Reporter, Result};
//!
//! fn main() -> Result<()> {
//!     let invocation = Invocation::new(false, ["Cargo.toml", "src"], [""; 0], ["src"]);
//!     let provenance = Provenance::detect()?;
//!     let mut reporter = Reporter::stdio();
//!
//!     let summary = autodemo::ops::run(&invocation, &provenance, &mut reporter, &FsProbe::new())?;
//!     assert_eq!(summary.invalid(), 0);
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - [`core`]: invocation snapshot and target classification
//! - [`io`]: filesystem probe, status line reporter, provenance
//! - [`ops`]: the run sequence tying them together
//! - [`error`]: error enum and result alias

// Public API exports
pub use error::{AutodemoError, Result};

pub use self::core::{Classified, Invocation, TargetKind};

pub use self::io::{emphasize, FsProbe, Probe, Provenance, Reporter};

pub use ops::{run, RunSummary};

pub mod core;
pub mod error;
pub mod io;
pub mod ops;
