//! Resolve dmno configuration and republish it to the runner.

mod arguments;

use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use tracing::{debug, error, info};

pub use arguments::build_invocation_arguments;

use crate::app::AppContext;
use crate::app::commands::checks::{get_package_manager, run_all_checks};
use crate::domain::inputs::{
    BASE_DIRECTORY, CLEAR_CACHE, EMIT_ENV_VARS, OUTPUT_VARS, PHASE, SERVICE_NAME, SKIP_CACHE,
    SKIP_REGEX,
};
use crate::domain::{
    AppError, DMNO, InputOptions, Platform, ResolvedConfig, SkipPattern, ToolInvocation,
    parse_boolean_input,
};
use crate::ports::{ActionHost, CommandRunner};

/// Step output carrying the published key → value map as JSON.
pub const OUTPUT_NAME: &str = "dmno";

/// Lifecycle of a single run. `Done` and `Failed` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPhase {
    Idle,
    Checking,
    Resolving,
    Publishing,
    Done,
    Failed,
}

impl fmt::Display for RunPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RunPhase::Idle => "idle",
            RunPhase::Checking => "checking",
            RunPhase::Resolving => "resolving",
            RunPhase::Publishing => "publishing",
            RunPhase::Done => "done",
            RunPhase::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// What a successful run published.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolveOutcome {
    /// Keys exported as environment variables, in key order.
    pub exported: Vec<String>,
    /// Keys removed by the skip pattern.
    pub skipped: Vec<String>,
    /// Number of values registered for masking.
    pub masked: usize,
    pub output_published: bool,
}

/// Result of [`execute`], after any failure has been reported to the runner.
#[derive(Debug)]
pub enum StepResult {
    Succeeded(ResolveOutcome),
    Failed(String),
}

impl StepResult {
    pub fn is_success(&self) -> bool {
        matches!(self, StepResult::Succeeded(_))
    }
}

/// Read the step inputs once.
pub fn read_inputs<H: ActionHost>(host: &H) -> Result<InputOptions, AppError> {
    let flag = |name: &str| parse_boolean_input(name, &host.get_input(name));

    Ok(InputOptions {
        service_name: host.get_input(SERVICE_NAME),
        base_directory: host.get_input(BASE_DIRECTORY),
        phase: host.get_input(PHASE),
        emit_env_vars: flag(EMIT_ENV_VARS)?,
        output_vars: flag(OUTPUT_VARS)?,
        skip_regex: host.get_input(SKIP_REGEX),
        skip_cache: flag(SKIP_CACHE)?,
        clear_cache: flag(CLEAR_CACHE)?,
    })
}

/// Run the step and report any failure to the runner. Never panics outward.
pub fn execute<H: ActionHost, R: CommandRunner>(
    ctx: &AppContext<H, R>,
    platform: &Platform,
) -> StepResult {
    let result = panic::catch_unwind(AssertUnwindSafe(|| run(ctx, platform)))
        .unwrap_or(Err(AppError::Unexpected));

    match result {
        Ok(outcome) => StepResult::Succeeded(outcome),
        Err(err) => {
            enter(RunPhase::Failed);
            error!(error = %err, "resolve run failed");
            let message = err.to_string();
            ctx.host().set_failed(&message);
            StepResult::Failed(message)
        }
    }
}

/// Check preconditions, run `dmno resolve`, and publish the result.
pub fn run<H: ActionHost, R: CommandRunner>(
    ctx: &AppContext<H, R>,
    platform: &Platform,
) -> Result<ResolveOutcome, AppError> {
    enter(RunPhase::Idle);

    enter(RunPhase::Checking);
    if !run_all_checks(ctx, platform)? {
        return Err(AppError::ToolUnavailable { tool: DMNO.to_string() });
    }

    let package_manager = get_package_manager(ctx.workspace())?;
    let inputs = read_inputs(ctx.host())?;
    let skip_pattern = SkipPattern::compile(&inputs.skip_regex)?;
    let invocation = ToolInvocation::dmno(
        &package_manager,
        build_invocation_arguments(&inputs),
        inputs.working_directory(ctx.workspace()),
    );

    enter(RunPhase::Resolving);
    let mut config = resolve(ctx, &invocation)?;

    let skipped = match &skip_pattern {
        Some(pattern) => config.remove_skipped(pattern),
        None => Vec::new(),
    };
    if !skipped.is_empty() {
        debug!(pattern = skip_pattern.as_ref().map(SkipPattern::as_str), ?skipped, "skipped keys");
    }

    enter(RunPhase::Publishing);
    let mut outcome = publish(ctx.host(), &config, &inputs)?;
    outcome.skipped = skipped;

    enter(RunPhase::Done);
    info!(
        exported = outcome.exported.len(),
        skipped = outcome.skipped.len(),
        masked = outcome.masked,
        "resolved configuration published"
    );
    Ok(outcome)
}

fn resolve<H: ActionHost, R: CommandRunner>(
    ctx: &AppContext<H, R>,
    invocation: &ToolInvocation,
) -> Result<ResolvedConfig, AppError> {
    ctx.host().debug(&format!("Running {invocation}"));
    let output = ctx.runner().run(invocation)?;

    // stdout holds secret values and is never echoed before masking
    debug!(bytes = output.stdout.len(), status = %output.status(), "dmno resolve finished");

    let stderr = output.stderr.trim();
    if !stderr.is_empty() {
        ctx.host().debug(stderr);
        return Err(AppError::SubprocessStderr(stderr.to_string()));
    }
    if !output.success() {
        return Err(AppError::ResolveFailed { status: output.status() });
    }

    ResolvedConfig::parse(&output.stdout)
}

fn publish<H: ActionHost>(
    host: &H,
    config: &ResolvedConfig,
    inputs: &InputOptions,
) -> Result<ResolveOutcome, AppError> {
    let mut outcome = ResolveOutcome::default();

    // masks must be registered before any value reaches a log or file command
    for value in config.sensitive_values() {
        host.set_secret(value)?;
        outcome.masked += 1;
    }

    let values = config.values();

    if inputs.output_vars {
        let json = serde_json::to_string(&values)
            .map_err(|e| AppError::parse_error("resolved values", e))?;
        host.set_output(OUTPUT_NAME, &json)?;
        outcome.output_published = true;
    }

    if inputs.emit_env_vars {
        for (key, value) in &values {
            host.export_variable(key, value)?;
            outcome.exported.push(key.clone());
        }
    }

    Ok(outcome)
}

fn enter(phase: RunPhase) {
    debug!(%phase, "resolve run");
}
