//! dmno-action: resolve dmno configuration and republish it to GitHub Actions.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use app::AppContext;
pub use app::commands::checks::{
    deps_check, get_package_manager, os_check, run_all_checks, tool_availability_check,
};
pub use app::commands::resolve::{
    OUTPUT_NAME, ResolveOutcome, RunPhase, StepResult, build_invocation_arguments, execute,
    read_inputs, run,
};
pub use domain::AppError;
