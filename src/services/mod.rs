pub mod adapters;

pub use adapters::github_actions_host::GitHubActionsHost;
pub use adapters::process_command::ProcessCommandRunner;
