//! CLI module for the autodemo command-line interface
//!
//! Argument parsing lives in [`args`], the bridge to the library run in
//! [`commands`].

pub mod args;
pub mod commands;
