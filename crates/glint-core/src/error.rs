//! Error types for the Glint core library.

use thiserror::Error;

/// Result type alias using `CoreError`.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error types for Glint.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A breakpoint threshold that cannot express a narrow/wide boundary.
    #[error("Invalid breakpoint threshold: {threshold}px")]
    InvalidThreshold { threshold: u32 },
}

impl CoreError {
    /// Create a new invalid-threshold error.
    pub fn invalid_threshold(threshold: u32) -> Self {
        Self::InvalidThreshold { threshold }
    }
}
