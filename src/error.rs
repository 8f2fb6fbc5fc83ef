//! Error handling for the service wizard.
//! Defines custom error types and results used throughout the application.

use std::io;
use thiserror::Error;

/// Custom error types for wizard operations.
///
/// This enum represents all possible errors that can occur during a
/// generation run. It implements the standard Error trait through
/// thiserror's derive macro.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Represents validation failures in user input.
    /// Handled at the prompt boundary; only escapes when the retry
    /// budget is exhausted or answers come from stdin.
    #[error("Validation error: {0}.")]
    ValidationError(String),

    /// The template set is missing from its install location
    #[error("Template directory does not exist: {template_dir}.")]
    MissingTemplateError { template_dir: String },

    /// The output directory already exists; generation never overwrites
    #[error("Output directory already exists: {output_dir}. Remove it or pick another service name.")]
    OutputExistsError { output_dir: String },

    /// An unrecognized feature toggle name reached `apply_feature`
    #[error("Unknown feature: {feature}.")]
    UnknownFeatureError { feature: String },

    /// Represents errors while walking or reading the template set
    #[error("Template error: {0}.")]
    TemplateError(String),

    /// Represents errors in the stdin answers payload
    #[error("Answers error: {0}.")]
    AnswersError(String),
}

/// Convenience type alias for Results with the wizard's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) -> ! {
    eprintln!("{}", err);
    std::process::exit(1);
}
