pub mod ports;

pub use ports::{FakeCommandRunner, FakeHost, HostEvent};
pub use workspace::TestWorkspace;
