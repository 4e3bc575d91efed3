//! Precondition checks run before resolving configuration.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::{debug, warn};

use crate::app::AppContext;
use crate::domain::{
    AppError, DMNO, INSTALLED_DEPS_DIR, MANIFEST_FILE, PackageManager, Platform, ToolInvocation,
};
use crate::ports::{ActionHost, CommandRunner};

/// Verify a previous step installed the workspace dependencies.
pub fn deps_check(workspace: &Path) -> Result<(), AppError> {
    debug!(workspace = %workspace.display(), "checking installed dependencies");

    if !workspace.join(MANIFEST_FILE).exists() {
        return Err(AppError::MissingManifest);
    }
    if !workspace.join(INSTALLED_DEPS_DIR).exists() {
        return Err(AppError::MissingInstalledDeps);
    }
    Ok(())
}

/// Only Linux and macOS runners are supported.
pub fn os_check(platform: &Platform) -> Result<(), AppError> {
    debug!(%platform, "checking operating system");

    if !platform.is_supported() {
        return Err(AppError::UnsupportedPlatform { platform: platform.to_string() });
    }
    Ok(())
}

/// Detect the package manager declared in the workspace's `package.json`.
pub fn get_package_manager(workspace: &Path) -> Result<PackageManager, AppError> {
    let path = workspace.join(MANIFEST_FILE);
    let content = fs::read_to_string(&path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => AppError::MissingManifest,
        _ => AppError::parse_error(MANIFEST_FILE, e),
    })?;

    let package_manager = PackageManager::from_manifest(&content)?;
    debug!(%package_manager, "detected package manager");
    Ok(package_manager)
}

/// Probe `dmno --version` through the package manager from the workspace root.
///
/// Failures are reported to the runner as a warning and yield `false`.
pub fn tool_availability_check<H: ActionHost, R: CommandRunner>(ctx: &AppContext<H, R>) -> bool {
    ctx.host().debug("Checking that dmno is installed");

    match probe_tool(ctx) {
        Ok(()) => {
            ctx.host().debug("dmno is installed and available");
            true
        }
        Err(details) => {
            let message = format!(
                "{DMNO} is not installed or not available in the current working directory, error: {details}"
            );
            warn!("{message}");
            ctx.host().warning(&message);
            false
        }
    }
}

fn probe_tool<H: ActionHost, R: CommandRunner>(ctx: &AppContext<H, R>) -> Result<(), String> {
    let package_manager = get_package_manager(ctx.workspace()).map_err(|e| e.to_string())?;
    let invocation = ToolInvocation::dmno(
        &package_manager,
        vec!["--version".to_string()],
        ctx.workspace().to_path_buf(),
    );

    let output = ctx.runner().run(&invocation).map_err(|e| e.to_string())?;
    if !output.stderr.trim().is_empty() {
        ctx.host().debug(output.stderr.trim());
    }
    if !output.success() {
        return Err(format!("'{}' failed with {}", invocation, output.status()));
    }

    debug!(version = output.stdout.trim(), "dmno version");
    Ok(())
}

/// Run OS, dependency and tool checks in order, stopping at the first error.
///
/// Returns whether the dmno CLI is available.
pub fn run_all_checks<H: ActionHost, R: CommandRunner>(
    ctx: &AppContext<H, R>,
    platform: &Platform,
) -> Result<bool, AppError> {
    os_check(platform)?;
    deps_check(ctx.workspace())?;
    Ok(tool_availability_check(ctx))
}
