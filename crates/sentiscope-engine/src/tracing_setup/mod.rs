//! Structured tracing: span helpers and subscriber installation.

mod init;
pub mod spans;

pub use init::init_tracing;
