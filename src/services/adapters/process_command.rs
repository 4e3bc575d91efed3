use std::process::{Command, Stdio};

use tracing::debug;

use crate::domain::{AppError, ToolInvocation};
use crate::ports::{CommandOutput, CommandRunner};

/// Runs invocations as child processes without a shell.
#[derive(Debug, Clone, Default)]
pub struct ProcessCommandRunner;

impl ProcessCommandRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for ProcessCommandRunner {
    fn run(&self, invocation: &ToolInvocation) -> Result<CommandOutput, AppError> {
        debug!(command = %invocation, cwd = %invocation.cwd.display(), "spawning");

        let output = Command::new(&invocation.program)
            .args(&invocation.args)
            .current_dir(&invocation.cwd)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| AppError::ExternalToolError {
                tool: invocation.program.clone(),
                error: format!("Failed to execute '{}': {}", invocation, e),
            })?;

        let output = CommandOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };
        debug!(command = %invocation, status = %output.status(), "finished");
        Ok(output)
    }
}
