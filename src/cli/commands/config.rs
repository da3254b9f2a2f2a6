//! `validate` and `show` command handlers
//!
//! Thin wrappers over [`ConfigLoader`] that render results for a terminal
//! or as JSON.

use serde_json::{Value, json};

use crate::cli::args::{OutputFormat, ShowArgs, ValidateArgs};
use crate::config::{ConfigLoader, DEFAULT_MAX_FILE_SIZE, LoadResult, LoaderOptions};
use crate::error::CourseworkError;

/// Validate one or more configuration files.
///
/// Files are checked in order; the first failure aborts with its error.
/// Unrecognized keys are logged as warnings, or rejected with `--strict`.
///
/// # Errors
///
/// Returns the loader error for the first file that fails.
pub fn validate(args: &ValidateArgs, quiet: bool) -> Result<(), CourseworkError> {
    let loader = ConfigLoader::new(LoaderOptions {
        max_file_size: Some(DEFAULT_MAX_FILE_SIZE),
        strict: args.strict,
    });

    let mut loaded = Vec::with_capacity(args.files.len());
    for path in &args.files {
        tracing::info!(file = %path.display(), "validating configuration");

        let result = loader.load(path)?;
        for warning in &result.warnings {
            tracing::warn!(file = %path.display(), key = %warning.key, "{}", warning.message);
        }

        tracing::info!(file = %path.display(), "configuration valid");
        loaded.push((path.display().to_string(), result));
    }

    match args.format {
        OutputFormat::Human if !quiet => {
            for (file, result) in &loaded {
                println!("{}", summary_line(file, result.warnings.len()));
            }
        }
        OutputFormat::Human => {}
        OutputFormat::Json => {
            let reports: Vec<Value> = loaded
                .iter()
                .map(|(file, result)| report(file, result))
                .collect();
            println!("{}", serde_json::to_string_pretty(&reports)?);
        }
    }

    Ok(())
}

/// Load a configuration file and print it.
///
/// # Errors
///
/// Returns the loader error if the file fails to load.
pub fn show(args: &ShowArgs) -> Result<(), CourseworkError> {
    let loader = ConfigLoader::new(LoaderOptions {
        max_file_size: Some(DEFAULT_MAX_FILE_SIZE),
        ..LoaderOptions::default()
    });
    let result = loader.load(&args.file)?;
    for warning in &result.warnings {
        tracing::warn!(file = %args.file.display(), key = %warning.key, "{}", warning.message);
    }

    match args.format {
        OutputFormat::Human => println!("{}", result.config),
        OutputFormat::Json => println!("{}", result.config.to_json_string_pretty()?),
    }

    Ok(())
}

fn summary_line(file: &str, warnings: usize) -> String {
    let noun = if warnings == 1 { "warning" } else { "warnings" };
    format!("ok  {file} ({warnings} {noun})")
}

fn report(file: &str, result: &LoadResult) -> Value {
    json!({
        "file": file,
        "valid": true,
        "warnings": result
            .warnings
            .iter()
            .map(|w| json!({ "key": w.key, "message": w.message }))
            .collect::<Vec<_>>(),
    })
}
