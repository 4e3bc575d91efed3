//! Package manager detection from `package.json`.

use std::fmt;

use serde::Deserialize;

use crate::domain::AppError;

/// File name of the dependency manifest at the workspace root.
pub const MANIFEST_FILE: &str = "package.json";

/// Directory holding installed dependencies at the workspace root.
pub const INSTALLED_DEPS_DIR: &str = "node_modules";

/// Package manager used as the invocation prefix for the dmno CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackageManager {
    Npm,
    Yarn,
    Pnpm,
    Bun,
    /// Any other manager name declared in the manifest.
    Other(String),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Manifest {
    #[serde(default)]
    package_manager: Option<String>,
}

impl PackageManager {
    /// Parse the `packageManager` field (`name@version` or bare `name`).
    ///
    /// Only the manager name is kept; the pinned version is dropped.
    pub fn from_declaration(declared: &str) -> Option<Self> {
        let name = declared.trim().split('@').next().unwrap_or_default().trim();
        if name.is_empty() {
            return None;
        }

        Some(match name {
            "npm" => PackageManager::Npm,
            "yarn" => PackageManager::Yarn,
            "pnpm" => PackageManager::Pnpm,
            "bun" => PackageManager::Bun,
            other => PackageManager::Other(other.to_string()),
        })
    }

    /// Extract the package manager from raw `package.json` content.
    pub fn from_manifest(content: &str) -> Result<Self, AppError> {
        let manifest: Manifest = serde_json::from_str(content)
            .map_err(|e| AppError::parse_error(MANIFEST_FILE, e))?;

        manifest
            .package_manager
            .as_deref()
            .and_then(Self::from_declaration)
            .ok_or(AppError::NoPackageManagerDeclared)
    }

    /// Executable name to spawn.
    pub fn program(&self) -> &str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "yarn",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Bun => "bun",
            PackageManager::Other(name) => name,
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.program())
    }
}
