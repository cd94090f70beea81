//! Command-line interface
//!
//! Argument definitions and command handlers for the `dsc-docs` binary.

pub mod args;
pub mod commands;
