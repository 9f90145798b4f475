//! Error types for poly_ast crate.

use thiserror::Error;

/// Errors that can occur when building term model values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AstError {
    /// The variable marker must be a single ASCII letter
    #[error("invalid variable marker '{0}': expected a single ASCII letter")]
    InvalidVariable(String),
}
