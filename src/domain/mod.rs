pub mod error;
pub mod inputs;
pub mod invocation;
pub mod package_manager;
pub mod platform;
pub mod resolved_config;

pub use error::AppError;
pub use inputs::{InputOptions, parse_boolean_input};
pub use invocation::{DMNO, ToolInvocation};
pub use package_manager::{INSTALLED_DEPS_DIR, MANIFEST_FILE, PackageManager};
pub use platform::Platform;
pub use resolved_config::{ConfigNode, ResolvedConfig, SkipPattern};
