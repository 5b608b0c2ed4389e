//! Process-wide tracing setup for ordertrail binaries.

mod subscriber;

pub use subscriber::{LogFormat, init, init_with};
