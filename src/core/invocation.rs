//! Invocation arguments and target list normalization
//!
//! An [`Invocation`] is the parsed snapshot of one run: the demo flag, the set
//! of special targets and the normalized target list. Positional arguments,
//! unrecognized tokens and special strings are all folded into one sorted,
//! duplicate-free list.
//!
//! Targets stay [`OsString`]s so names that are not valid UTF-8 reach the
//! filesystem untouched. Ordering is by encoded bytes, which is what `Ord`
//! on `OsStr` compares.

use std::collections::BTreeSet;
use std::ffi::{OsStr, OsString};

/// Parsed arguments for a single run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invocation {
    flag: bool,
    special: BTreeSet<OsString>,
    targets: Vec<OsString>,
}

impl Invocation {
    /// Build an invocation from the raw parser output.
    ///
    /// `positional` and `unknown` are taken in any order and may contain
    /// duplicates; `special` strings are unioned into the targets as well.
    pub fn new<P, U, S>(flag: bool, positional: P, unknown: U, special: S) -> Self
    where
        P: IntoIterator,
        P::Item: Into<OsString>,
        U: IntoIterator,
        U::Item: Into<OsString>,
        S: IntoIterator,
        S::Item: Into<OsString>,
    {
        let special: BTreeSet<OsString> = special.into_iter().map(Into::into).collect();

        let targets: BTreeSet<OsString> = positional
            .into_iter()
            .map(Into::into)
            .chain(unknown.into_iter().map(Into::into))
            .chain(special.iter().cloned())
            .collect();

        Self {
            flag,
            special,
            targets: targets.into_iter().collect(),
        }
    }

    /// Whether `-f/--flag` was given
    pub fn flag(&self) -> bool {
        self.flag
    }

    /// Targets in byte order, without duplicates
    pub fn targets(&self) -> &[OsString] {
        &self.targets
    }

    /// Whether `target` should be highlighted
    pub fn is_special(&self, target: &OsStr) -> bool {
        self.special.contains(target)
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }
}
