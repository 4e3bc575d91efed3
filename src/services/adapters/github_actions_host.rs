//! GitHub Actions runner protocol.
//!
//! Step inputs arrive as `INPUT_*` environment variables. Outputs and
//! exported variables are appended to the files named by `GITHUB_OUTPUT` and
//! `GITHUB_ENV`; everything else is a `::command::` line on stdout.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use uuid::Uuid;

use crate::domain::AppError;
use crate::ports::ActionHost;

const INPUT_PREFIX: &str = "INPUT_";

pub struct GitHubActionsHost<W: Write = io::Stdout> {
    inputs: BTreeMap<String, String>,
    env_file: Option<PathBuf>,
    output_file: Option<PathBuf>,
    commands: RefCell<W>,
    failed: Cell<bool>,
}

impl GitHubActionsHost<io::Stdout> {
    /// Snapshot inputs and file-command paths from the process environment.
    pub fn from_env() -> Self {
        let inputs = std::env::vars_os()
            .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
            .filter(|(key, _)| key.starts_with(INPUT_PREFIX))
            .collect();
        let file_var = |name: &str| {
            std::env::var_os(name).filter(|value| !value.is_empty()).map(PathBuf::from)
        };

        Self {
            inputs,
            env_file: file_var("GITHUB_ENV"),
            output_file: file_var("GITHUB_OUTPUT"),
            commands: RefCell::new(io::stdout()),
            failed: Cell::new(false),
        }
    }
}

impl<W: Write> GitHubActionsHost<W> {
    fn issue(&self, command: &str, properties: &[(&str, &str)], message: &str) -> io::Result<()> {
        let mut line = format!("::{command}");
        if !properties.is_empty() {
            let props: Vec<String> = properties
                .iter()
                .map(|(key, value)| format!("{key}={}", escape_property(value)))
                .collect();
            line.push(' ');
            line.push_str(&props.join(","));
        }
        line.push_str("::");
        line.push_str(&escape_data(message));

        let mut out = self.commands.borrow_mut();
        writeln!(out, "{line}")?;
        out.flush()
    }

    fn issue_or_warn(&self, command: &str, message: &str) {
        if let Err(e) = self.issue(command, &[], message) {
            warn!(command, error = %e, "failed to write workflow command");
        }
    }
}

#[cfg(test)]
impl<W: Write> GitHubActionsHost<W> {
    /// Host with no inputs and no file commands, writing workflow commands to `commands`.
    pub(crate) fn with_writer(commands: W) -> Self {
        Self {
            inputs: BTreeMap::new(),
            env_file: None,
            output_file: None,
            commands: RefCell::new(commands),
            failed: Cell::new(false),
        }
    }

    /// Set an input by its action name (e.g. `service-name`).
    pub(crate) fn with_input(mut self, name: &str, value: &str) -> Self {
        self.inputs.insert(input_env_key(name), value.to_string());
        self
    }

    pub(crate) fn with_env_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.env_file = Some(path.into());
        self
    }

    pub(crate) fn with_output_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_file = Some(path.into());
        self
    }

    /// Whether `set_failed` has been called.
    pub(crate) fn failed(&self) -> bool {
        self.failed.get()
    }

    pub(crate) fn into_writer(self) -> W {
        self.commands.into_inner()
    }
}

impl<W: Write> ActionHost for GitHubActionsHost<W> {
    fn get_input(&self, name: &str) -> String {
        self.inputs.get(&input_env_key(name)).map(|v| v.trim().to_string()).unwrap_or_default()
    }

    fn set_output(&self, name: &str, value: &str) -> Result<(), AppError> {
        match &self.output_file {
            Some(path) => append_file_command(path, "set-output", name, value),
            None => self
                .issue("set-output", &[("name", name)], value)
                .map_err(|e| AppError::host_command("set-output", e)),
        }
    }

    fn export_variable(&self, name: &str, value: &str) -> Result<(), AppError> {
        match &self.env_file {
            Some(path) => append_file_command(path, "set-env", name, value),
            None => self
                .issue("set-env", &[("name", name)], value)
                .map_err(|e| AppError::host_command("set-env", e)),
        }
    }

    fn set_secret(&self, value: &str) -> Result<(), AppError> {
        self.issue("add-mask", &[], value).map_err(|e| AppError::host_command("add-mask", e))
    }

    fn debug(&self, message: &str) {
        self.issue_or_warn("debug", message);
    }

    fn warning(&self, message: &str) {
        self.issue_or_warn("warning", message);
    }

    fn set_failed(&self, message: &str) {
        self.failed.set(true);
        self.issue_or_warn("error", message);
    }
}

/// `service-name` → `INPUT_SERVICE-NAME`
fn input_env_key(name: &str) -> String {
    format!("{INPUT_PREFIX}{}", name.replace(' ', "_").to_uppercase())
}

fn escape_data(value: &str) -> String {
    value.replace('%', "%25").replace('\r', "%0D").replace('\n', "%0A")
}

fn escape_property(value: &str) -> String {
    escape_data(value).replace(':', "%3A").replace(',', "%2C")
}

/// Build a `key<<delimiter` block for an environment file.
fn key_value_message(command: &str, key: &str, value: &str) -> Result<String, AppError> {
    let delimiter = format!("ghadelimiter_{}", Uuid::new_v4());
    if key.contains(&delimiter) {
        return Err(AppError::host_command(
            command,
            format!("name should not contain the delimiter \"{delimiter}\""),
        ));
    }
    if value.contains(&delimiter) {
        return Err(AppError::host_command(
            command,
            format!("value should not contain the delimiter \"{delimiter}\""),
        ));
    }
    Ok(format!("{key}<<{delimiter}\n{value}\n{delimiter}\n"))
}

fn append_file_command(path: &Path, command: &str, key: &str, value: &str) -> Result<(), AppError> {
    let message = key_value_message(command, key, value)?;
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| AppError::host_command(command, format!("{}: {}", path.display(), e)))?;
    file.write_all(message.as_bytes())
        .map_err(|e| AppError::host_command(command, format!("{}: {}", path.display(), e)))?;
    debug!(command, key, file = %path.display(), "appended file command");
    Ok(())
}
