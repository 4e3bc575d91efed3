mod fake_command_runner;
mod fake_host;

pub use self::fake_command_runner::FakeCommandRunner;
pub use self::fake_host::{FakeHost, HostEvent};
