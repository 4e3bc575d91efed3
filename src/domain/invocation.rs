use std::fmt;
use std::path::PathBuf;

use crate::domain::PackageManager;

/// Name of the configuration CLI run through the package manager.
pub const DMNO: &str = "dmno";

/// A fully built subprocess call: program, argv and working directory.
///
/// Arguments are passed to the process as-is; no shell is involved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolInvocation {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
}

impl ToolInvocation {
    /// `<pm> exec dmno <tool_args...>`
    ///
    /// npm parses flags after `exec` as its own unless they follow `--`.
    pub fn dmno(pm: &PackageManager, tool_args: Vec<String>, cwd: PathBuf) -> Self {
        let mut args = vec!["exec".to_string()];
        if matches!(pm, PackageManager::Npm) {
            args.push("--".to_string());
        }
        args.push(DMNO.to_string());
        args.extend(tool_args);
        Self { program: pm.program().to_string(), args, cwd }
    }

    /// Arguments handed to dmno itself.
    pub fn tool_args(&self) -> &[String] {
        match self.args.iter().position(|arg| arg == DMNO) {
            Some(index) => &self.args[index + 1..],
            None => &[],
        }
    }
}

impl fmt::Display for ToolInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            if arg.is_empty() || arg.contains(char::is_whitespace) {
                write!(f, " {arg:?}")?;
            } else {
                write!(f, " {arg}")?;
            }
        }
        Ok(())
    }
}
