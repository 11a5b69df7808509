//! Build errors for the session machine builder.

use crate::core::InvalidSession;
use thiserror::Error;

/// Errors that can occur when building a session machine.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Initial session rejected: {0}")]
    InvalidSession(#[from] InvalidSession),
}
