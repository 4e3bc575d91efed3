//! Check command implementation.

use std::path::PathBuf;

use crate::app::AppContext;
use crate::app::commands::checks;
use crate::domain::{AppError, DMNO, Platform};
use crate::ports::ActionHost;
use crate::services::{GitHubActionsHost, ProcessCommandRunner};

pub fn run_check(workspace: PathBuf) -> Result<i32, AppError> {
    let ctx = AppContext::new(GitHubActionsHost::from_env(), ProcessCommandRunner::new(), workspace);

    let failure = match checks::run_all_checks(&ctx, &Platform::current()) {
        Ok(true) => None,
        Ok(false) => Some(AppError::ToolUnavailable { tool: DMNO.to_string() }),
        Err(e) => Some(e),
    };

    match failure {
        None => {
            eprintln!("✅ All preconditions met");
            Ok(0)
        }
        Some(e) => {
            ctx.host().set_failed(&e.to_string());
            Ok(1)
        }
    }
}
