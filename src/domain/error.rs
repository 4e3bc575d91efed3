use std::io;

use thiserror::Error;

/// Library-wide error type for dmno-action operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// No package.json at the workspace root.
    #[error("package.json does not exist in repository")]
    MissingManifest,

    /// No node_modules at the workspace root.
    #[error("node_modules does not exist in repository")]
    MissingInstalledDeps,

    /// Host operating system is not Linux or macOS.
    #[error("Unsupported operating system - only Linux and macOS are supported")]
    UnsupportedPlatform { platform: String },

    /// The dmno CLI could not be reached through the package manager.
    #[error("{tool} is not installed or not available in the current working directory")]
    ToolUnavailable { tool: String },

    /// Parse error.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },

    /// package.json has no `packageManager` field.
    #[error("No package manager specified in package.json")]
    NoPackageManagerDeclared,

    /// The resolve command wrote to stderr.
    #[error("dmno resolve reported errors: {0}")]
    SubprocessStderr(String),

    /// The resolve command exited unsuccessfully without writing to stderr.
    #[error("dmno resolve exited with {status}")]
    ResolveFailed { status: String },

    /// The resolve command produced no configuration nodes.
    #[error("dmno resolve failed or empty output")]
    EmptyResolution,

    /// A step input could not be interpreted.
    #[error("Input '{name}' is invalid: {reason}")]
    InvalidInput { name: String, reason: String },

    /// The skip-regex input is not a valid regular expression.
    #[error("Invalid skip-regex '{pattern}': {details}")]
    InvalidSkipPattern { pattern: String, details: String },

    /// External tool could not be spawned.
    #[error("{tool} failed: {error}")]
    ExternalToolError { tool: String, error: String },

    /// A runner file command could not be written.
    #[error("Unable to process {command} command: {details}")]
    HostCommand { command: String, details: String },

    /// Anything that is not one of the above (panics included).
    #[error("An unexpected error occurred")]
    Unexpected,
}

impl AppError {
    pub fn parse_error(what: impl Into<String>, details: impl ToString) -> Self {
        AppError::ParseError { what: what.into(), details: details.to_string() }
    }

    pub(crate) fn host_command(command: &str, details: impl ToString) -> Self {
        AppError::HostCommand { command: command.to_string(), details: details.to_string() }
    }
}
