//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod process_runner;

pub use process_runner::{Invocation, ProcessRunner, ToolOutput};
