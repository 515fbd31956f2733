//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//!
//! ## Structure
//!
//! - `cli` - Argument definitions
//! - `factory` - Wires use cases to the system process runner
//!
//! ## Usage
//!
//! ```ignore
//! use libforge::presentation::factory;
//!
//! let use_case = factory::create_build_use_case(&config);
//! let report = use_case.build(&request)?;
//! ```

pub mod cli;
pub mod factory;

pub use cli::{Cli, Commands};
pub use factory::create_build_use_case;
