//! Target kinds and classification
//!
//! Classification checks, in order: regular file, directory, symbolic link.
//! The first check that succeeds wins, so a link pointing at a file or a
//! directory is reported as that file or directory. Only links that resolve
//! to neither (dangling links, links to sockets or devices) come out as
//! [`TargetKind::Symlink`].

use crate::error::AutodemoError;
use crate::io::Probe;
use log::trace;
use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::Path;

/// What a target turned out to be
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetKind {
    File,
    Directory,
    Symlink,
    Invalid,
}

impl TargetKind {
    /// Classify `target` using `probe`, first match wins
    pub fn classify<P: Probe + ?Sized>(probe: &P, target: &OsStr) -> Self {
        let path = Path::new(target);

        let kind = if probe.is_file(path) {
            Self::File
        } else if probe.is_dir(path) {
            Self::Directory
        } else if probe.is_symlink(path) {
            Self::Symlink
        } else {
            Self::Invalid
        };

        trace!("classified {:?} as {}", target, kind);
        kind
    }

    /// Anything but [`TargetKind::Invalid`]
    pub fn is_valid(self) -> bool {
        self != Self::Invalid
    }

    /// Human description used in status lines
    pub fn description(self) -> &'static str {
        match self {
            Self::File => "a file",
            Self::Directory => "a directory",
            Self::Symlink => "a symbolic link",
            Self::Invalid => "not a valid file or directory",
        }
    }
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// A target together with its classification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classified {
    pub target: OsString,
    pub kind: TargetKind,
    pub special: bool,
}

impl Classified {
    pub fn new(target: impl Into<OsString>, kind: TargetKind, special: bool) -> Self {
        Self {
            target: target.into(),
            kind,
            special,
        }
    }

    /// Status line text for a valid target, the error for an invalid one.
    ///
    /// Names that are not valid UTF-8 are rendered lossily here and only here.
    pub fn status(&self) -> std::result::Result<String, AutodemoError> {
        let name = self.target.to_string_lossy();
        if self.kind.is_valid() {
            Ok(format!("\t{} is {}.", name, self.kind))
        } else {
            Err(AutodemoError::invalid_target(name))
        }
    }
}
