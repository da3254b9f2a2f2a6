//! Observability module
//!
//! Structured logging for the `coursework` library and CLI.

pub mod logging;

pub use logging::{LogFormat, init_logging};
