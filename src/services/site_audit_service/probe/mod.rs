pub mod probe;

pub use probe::{wait_for_server, AttemptError, HttpCheck, ReachabilityCheck};
