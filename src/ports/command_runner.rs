use crate::domain::{AppError, ToolInvocation};

/// Captured result of a finished subprocess.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code; `None` when the process was terminated by a signal.
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// Human-readable exit status.
    pub fn status(&self) -> String {
        match self.code {
            Some(code) => format!("exit code {code}"),
            None => "termination by signal".to_string(),
        }
    }
}

pub trait CommandRunner {
    /// Run to completion, capturing stdout and stderr.
    ///
    /// Errors only when the process cannot be spawned; a non-zero exit is
    /// reported through [`CommandOutput::code`].
    fn run(&self, invocation: &ToolInvocation) -> Result<CommandOutput, AppError>;
}
