//! Resolve command implementation.

use std::path::PathBuf;

use crate::app::AppContext;
use crate::app::commands::resolve::{self, StepResult};
use crate::domain::{AppError, Platform};
use crate::services::{GitHubActionsHost, ProcessCommandRunner};

pub fn run_resolve(workspace: PathBuf) -> Result<i32, AppError> {
    let ctx = AppContext::new(GitHubActionsHost::from_env(), ProcessCommandRunner::new(), workspace);

    match resolve::execute(&ctx, &Platform::current()) {
        StepResult::Succeeded(outcome) => {
            eprintln!(
                "✅ Resolved configuration: {} exported, {} skipped, {} masked",
                outcome.exported.len(),
                outcome.skipped.len(),
                outcome.masked
            );
            Ok(0)
        }
        StepResult::Failed(_) => Ok(1),
    }
}
