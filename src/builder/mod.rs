//! Builder API for ergonomic session machine construction.
//!
//! This module provides a fluent builder for the initial session and the
//! `state_enum!` macro used to declare fieldless phase enums.

pub mod error;
pub mod machine;
pub mod macros;

pub use error::BuildError;
pub use machine::SessionMachineBuilder;
