pub mod probe;
pub mod provenance;
pub mod reporter;

pub use probe::{FsProbe, Probe};
pub use provenance::Provenance;
pub use reporter::{emphasize, Reporter};
