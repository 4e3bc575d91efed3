use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::{AppError, ToolInvocation};
use crate::ports::{CommandOutput, CommandRunner};

#[derive(Debug, Clone)]
enum Reply {
    Exit(CommandOutput),
    SpawnFailure(String),
}

/// Scripted runner keyed by the dmno subcommand (`--version`, `resolve`).
///
/// Unscripted calls exit 0 with empty output.
#[derive(Default)]
pub struct FakeCommandRunner {
    replies: HashMap<String, Reply>,
    pub calls: Mutex<Vec<ToolInvocation>>,
}

impl FakeCommandRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(mut self, subcommand: &str, code: i32, stdout: &str, stderr: &str) -> Self {
        self.replies.insert(
            subcommand.to_string(),
            Reply::Exit(CommandOutput {
                code: Some(code),
                stdout: stdout.to_string(),
                stderr: stderr.to_string(),
            }),
        );
        self
    }

    /// Successful `resolve` printing `stdout`.
    pub fn resolving_to(self, stdout: &str) -> Self {
        self.on("resolve", 0, stdout, "")
    }

    pub fn failing_to_spawn(mut self, subcommand: &str, message: &str) -> Self {
        self.replies.insert(subcommand.to_string(), Reply::SpawnFailure(message.to_string()));
        self
    }

    pub fn calls(&self) -> Vec<ToolInvocation> {
        self.calls.lock().unwrap().clone()
    }
}

impl CommandRunner for FakeCommandRunner {
    fn run(&self, invocation: &ToolInvocation) -> Result<CommandOutput, AppError> {
        self.calls.lock().unwrap().push(invocation.clone());

        let subcommand = invocation.tool_args().first().cloned().unwrap_or_default();
        match self.replies.get(&subcommand) {
            Some(Reply::Exit(output)) => Ok(output.clone()),
            Some(Reply::SpawnFailure(message)) => Err(AppError::ExternalToolError {
                tool: invocation.program.clone(),
                error: message.clone(),
            }),
            None => Ok(CommandOutput { code: Some(0), ..Default::default() }),
        }
    }
}
