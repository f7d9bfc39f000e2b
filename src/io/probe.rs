//! Filesystem queries used by target classification
//!
//! The [`Probe`] trait is the single seam between classification and the
//! filesystem. [`FsProbe`] answers from the real filesystem; any query error
//! (missing path, permission denied) reads as "no".

use std::fs;
use std::path::Path;

/// Answers the three questions classification asks about a path
pub trait Probe {
    /// Regular file, following symbolic links
    fn is_file(&self, path: &Path) -> bool;

    /// Directory, following symbolic links
    fn is_dir(&self, path: &Path) -> bool;

    /// The path itself is a symbolic link (not followed)
    fn is_symlink(&self, path: &Path) -> bool;
}

/// Probe backed by `std::fs` metadata
#[derive(Debug, Clone, Copy, Default)]
pub struct FsProbe;

impl FsProbe {
    pub fn new() -> Self {
        Self
    }
}

impl Probe for FsProbe {
    fn is_file(&self, path: &Path) -> bool {
        fs::metadata(path).map(|m| m.is_file()).unwrap_or(false)
    }

    fn is_dir(&self, path: &Path) -> bool {
        fs::metadata(path).map(|m| m.is_dir()).unwrap_or(false)
    }

    fn is_symlink(&self, path: &Path) -> bool {
        fs::symlink_metadata(path)
            .map(|m| m.file_type().is_symlink())
            .unwrap_or(false)
    }
}
