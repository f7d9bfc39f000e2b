pub mod invocation;
pub mod target;

pub use invocation::Invocation;
pub use target::{Classified, TargetKind};
