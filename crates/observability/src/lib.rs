//! Process-wide tracing setup shared by the binaries.

pub mod subscriber;

pub use subscriber::{LogFormat, LogFormatError, init, init_with};
