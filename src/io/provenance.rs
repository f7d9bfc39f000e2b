//! Where the program lives versus where it was called from

use crate::error::{AutodemoError, Result};
use std::env;
use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};

/// Absolute program location and invocation directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Provenance {
    script_path: PathBuf,
    call_dir: PathBuf,
}

impl Provenance {
    /// Resolve both paths for the current process
    pub fn detect() -> Result<Self> {
        let call_dir = env::current_dir()
            .map_err(|e| AutodemoError::provenance(format!("working directory: {}", e)))?;
        let argv0 = env::args_os().next();

        Self::resolve(argv0.as_deref(), call_dir, env::current_exe)
    }

    /// Resolve from explicit inputs.
    ///
    /// An `argv0` with a directory part is made absolute against `call_dir`.
    /// A bare program name was found through `PATH`, so the location comes
    /// from `current_exe` instead.
    pub fn resolve<F>(argv0: Option<&OsStr>, call_dir: PathBuf, current_exe: F) -> Result<Self>
    where
        F: FnOnce() -> std::io::Result<PathBuf>,
    {
        let invoked = argv0.map(Path::new).filter(|p| {
            !p.as_os_str().is_empty() && p.parent().map_or(false, |d| !d.as_os_str().is_empty())
        });

        let script_path = match invoked {
            Some(path) => absolutize(&call_dir, path),
            None => current_exe()
                .map_err(|e| AutodemoError::provenance(format!("program location: {}", e)))?,
        };

        Ok(Self {
            script_path,
            call_dir,
        })
    }

    pub fn script_path(&self) -> &Path {
        &self.script_path
    }

    /// Directory containing the program
    pub fn script_dir(&self) -> &Path {
        self.script_path.parent().unwrap_or(self.script_path.as_path())
    }

    pub fn call_dir(&self) -> &Path {
        &self.call_dir
    }
}

/// Join `path` onto `base` when relative, then fold `.` and `..` lexically
fn absolutize(base: &Path, path: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    };

    let mut normalized = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}
