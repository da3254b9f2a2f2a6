//! `coursework` - strict JSON configuration loading for course exercises
//!
//! The library reads a JSON document, checks that the five recognized keys
//! are present and correctly typed, and returns an immutable
//! [`Configuration`](config::Configuration). A small CLI wraps it for
//! inspection and validation.

pub mod cli;
pub mod config;
pub mod error;
pub mod observability;
