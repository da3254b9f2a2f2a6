//! Configuration module
//!
//! Loads the five-field run [`Configuration`] from JSON documents and
//! validates that every recognized key is present and correctly typed.

pub mod loader;
pub mod schema;

pub use loader::{
    ConfigLoader, DEFAULT_MAX_FILE_SIZE, LoadResult, LoadWarning, LoaderOptions, load,
};
pub use schema::{Configuration, Field, JsonKind};
