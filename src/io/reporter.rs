//! Status line output
//!
//! Informational lines go to the output stream as `[*] <text>`, error lines to
//! the error stream as `[!] <text>`. Emphasised text is wrapped in the ANSI
//! bold escape with one space of padding on each side.

use crate::core::Classified;
use crate::error::Result;
use std::io::{self, Stderr, Stdout, Write};

const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Wrap `text` in the bold marker
pub fn emphasize(text: &str) -> String {
    format!("{} {} {}", BOLD, text, RESET)
}

/// Writes status lines to an output and an error stream
#[derive(Debug)]
pub struct Reporter<O: Write, E: Write> {
    out: O,
    err: E,
}

impl Reporter<Stdout, Stderr> {
    /// Reporter bound to the process stdout and stderr
    pub fn stdio() -> Self {
        Self::new(io::stdout(), io::stderr())
    }
}

impl<O: Write, E: Write> Reporter<O, E> {
    pub fn new(out: O, err: E) -> Self {
        Self { out, err }
    }

    /// Write an informational line, optionally emphasised
    pub fn write(&mut self, text: &str, bold: bool) -> Result<()> {
        if bold {
            writeln!(self.out, "[*] {}", emphasize(text))?;
        } else {
            writeln!(self.out, "[*] {}", text)?;
        }
        Ok(())
    }

    /// Write an error line
    pub fn error(&mut self, message: &str) -> Result<()> {
        writeln!(self.err, "[!] {}", message)?;
        Ok(())
    }

    /// Write the single line for a classified target.
    ///
    /// Valid targets go to the output stream, bold when special. Invalid
    /// targets go to the error stream and are never emphasised.
    pub fn classified(&mut self, classified: &Classified) -> Result<()> {
        match classified.status() {
            Ok(line) => self.write(&line, classified.special),
            Err(e) => self.error(&e.to_string()),
        }
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        self.err.flush()?;
        Ok(())
    }

    /// Hand back the underlying streams
    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }
}
