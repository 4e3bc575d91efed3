//! Step inputs accepted by the action.

use std::path::{Path, PathBuf};

use crate::domain::AppError;

pub const SERVICE_NAME: &str = "service-name";
pub const BASE_DIRECTORY: &str = "base-directory";
pub const PHASE: &str = "phase";
pub const EMIT_ENV_VARS: &str = "emit-env-vars";
pub const OUTPUT_VARS: &str = "output-vars";
pub const SKIP_REGEX: &str = "skip-regex";
pub const SKIP_CACHE: &str = "skip-cache";
pub const CLEAR_CACHE: &str = "clear-cache";

/// Service resolved when `service-name` is left empty.
pub const DEFAULT_SERVICE: &str = "root";

/// Inputs for a single resolve run. Read once, never mutated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputOptions {
    pub service_name: String,
    pub base_directory: String,
    pub phase: String,
    pub emit_env_vars: bool,
    pub output_vars: bool,
    pub skip_regex: String,
    pub skip_cache: bool,
    pub clear_cache: bool,
}

impl InputOptions {
    /// Service to resolve, falling back to the root service.
    pub fn service(&self) -> &str {
        if self.service_name.is_empty() { DEFAULT_SERVICE } else { &self.service_name }
    }

    /// Working directory for `dmno resolve`.
    ///
    /// Relative base directories are taken relative to the workspace root.
    pub fn working_directory(&self, workspace: &Path) -> PathBuf {
        if self.base_directory.is_empty() {
            workspace.to_path_buf()
        } else {
            workspace.join(&self.base_directory)
        }
    }
}

/// Interpret a boolean input using the YAML 1.2 core schema.
///
/// An empty value reads as `false`.
pub fn parse_boolean_input(name: &str, raw: &str) -> Result<bool, AppError> {
    match raw.trim() {
        "" => Ok(false),
        "true" | "True" | "TRUE" => Ok(true),
        "false" | "False" | "FALSE" => Ok(false),
        other => Err(AppError::InvalidInput {
            name: name.to_string(),
            reason: format!(
                "'{other}' does not meet YAML 1.2 \"Core Schema\" specification. \
                 Support boolean input list: `true | True | TRUE | false | False | FALSE`"
            ),
        }),
    }
}
