pub mod github_actions_host;
pub mod process_command;
