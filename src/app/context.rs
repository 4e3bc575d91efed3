use std::path::{Path, PathBuf};

use crate::ports::{ActionHost, CommandRunner};

/// Application context holding dependencies for command execution.
pub struct AppContext<H: ActionHost, R: CommandRunner> {
    host: H,
    runner: R,
    workspace: PathBuf,
}

impl<H: ActionHost, R: CommandRunner> AppContext<H, R> {
    /// Create a new application context rooted at `workspace`.
    pub fn new(host: H, runner: R, workspace: impl Into<PathBuf>) -> Self {
        Self { host, runner, workspace: workspace.into() }
    }

    /// Runner-facing inputs, outputs and status.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Subprocess execution.
    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Repository root the checks and the resolve run against.
    pub fn workspace(&self) -> &Path {
        &self.workspace
    }
}
