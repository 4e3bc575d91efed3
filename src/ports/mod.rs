mod action_host;
mod command_runner;

pub use action_host::ActionHost;
pub use command_runner::{CommandOutput, CommandRunner};
