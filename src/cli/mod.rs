//! Command-line interface
//!
//! Argument definitions and command handlers for the `coursework` binary.

pub mod args;
pub mod commands;
