//! Shared testing utilities for dmno-action CLI tests.

use assert_cmd::Command;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated workspace, runner files and a fake package manager.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
    bin_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        let bin_dir = root.path().join("bin");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        fs::create_dir_all(&bin_dir).expect("Failed to create fake bin directory");

        Self { root, work_dir, bin_dir }
    }

    /// Workspace with `package.json` declaring `npm`, installed deps, and a working dmno.
    pub fn with_npm_workspace() -> Self {
        let ctx = Self::new();
        ctx.write_manifest(r#"{"name": "app", "packageManager": "npm@10.8.0"}"#);
        ctx.install_deps();
        ctx.install_fake_package_manager("npm", 0);
        ctx
    }

    /// Path to the workspace directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    pub fn write_manifest(&self, content: &str) {
        fs::write(self.work_dir.join("package.json"), content).expect("write package.json");
    }

    pub fn install_deps(&self) {
        fs::create_dir_all(self.work_dir.join("node_modules")).expect("create node_modules");
    }

    /// Install `<name>` on PATH. `dmno --version` exits with `version_exit`;
    /// `dmno resolve` prints the configured stdout/stderr.
    pub fn install_fake_package_manager(&self, name: &str, version_exit: i32) {
        let root = self.root.path().display();
        let script = format!(
            r#"#!/bin/sh
echo "$@" >> "{root}/calls.log"
[ "$2" = "--" ] && shift
if [ "$3" = "--version" ]; then
  echo "0.0.20"
  exit {version_exit}
fi
[ -f "{root}/resolve.stdout" ] && cat "{root}/resolve.stdout"
[ -f "{root}/resolve.stderr" ] && cat "{root}/resolve.stderr" >&2
exit 0
"#
        );
        let path = self.bin_dir.join(name);
        fs::write(&path, script).expect("write fake package manager");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).expect("chmod fake package manager");
    }

    /// What `dmno resolve` prints on stdout.
    pub fn set_resolve_stdout(&self, stdout: &str) {
        fs::write(self.root.path().join("resolve.stdout"), stdout).expect("write resolve stdout");
    }

    /// What `dmno resolve` prints on stderr.
    pub fn set_resolve_stderr(&self, stderr: &str) {
        fs::write(self.root.path().join("resolve.stderr"), stderr).expect("write resolve stderr");
    }

    /// Argument lines the fake package manager received, one per call.
    pub fn calls(&self) -> Vec<String> {
        fs::read_to_string(self.root.path().join("calls.log"))
            .map(|log| log.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }

    pub fn env_file(&self) -> PathBuf {
        self.root.path().join("github_env")
    }

    pub fn output_file(&self) -> PathBuf {
        self.root.path().join("github_output")
    }

    /// Pairs written to `GITHUB_ENV`.
    pub fn exported(&self) -> Vec<(String, String)> {
        read_file_commands(&self.env_file())
    }

    /// Pairs written to `GITHUB_OUTPUT`.
    pub fn outputs(&self) -> Vec<(String, String)> {
        read_file_commands(&self.output_file())
    }

    /// Build a command for invoking the compiled binary as a GitHub Actions step.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("dmno-action").expect("Failed to locate dmno-action binary");
        let path = match std::env::var_os("PATH") {
            Some(existing) => {
                let mut paths = vec![self.bin_dir.clone()];
                paths.extend(std::env::split_paths(&existing));
                std::env::join_paths(paths).expect("join PATH")
            }
            None => self.bin_dir.clone().into_os_string(),
        };

        for (key, _) in std::env::vars_os() {
            if key.to_string_lossy().starts_with("INPUT_") {
                cmd.env_remove(&key);
            }
        }

        cmd.current_dir(&self.work_dir)
            .env("PATH", path)
            .env("GITHUB_WORKSPACE", &self.work_dir)
            .env("GITHUB_ENV", self.env_file())
            .env("GITHUB_OUTPUT", self.output_file())
            .env_remove("RUNNER_DEBUG")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Same as [`cli`](Self::cli) with `INPUT_*` variables set from action input names.
    pub fn cli_with_inputs(&self, inputs: &[(&str, &str)]) -> Command {
        let mut cmd = self.cli();
        for (name, value) in inputs {
            cmd.env(format!("INPUT_{}", name.replace(' ', "_").to_uppercase()), value);
        }
        cmd
    }
}

fn read_file_commands(path: &Path) -> Vec<(String, String)> {
    let Ok(contents) = fs::read_to_string(path) else {
        return Vec::new();
    };
    let mut lines = contents.lines();
    let mut pairs = Vec::new();
    while let Some(header) = lines.next() {
        let (key, delimiter) = header.split_once("<<").expect("heredoc header");
        let mut value = Vec::new();
        for line in lines.by_ref() {
            if line == delimiter {
                break;
            }
            value.push(line);
        }
        pairs.push((key.to_string(), value.join("\n")));
    }
    pairs
}
