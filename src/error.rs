//! Error taxonomy for layer evaluation.
//!
//! Both kinds are fatal to the current apply call and propagate unchanged
//! to the caller; there is no fallback and no partial output.

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A requested activation function or wrapped layer type is not
    /// implemented. Carries the offending identifier.
    #[error("not supported: {0}")]
    UnsupportedOperation(String),
    /// An invalid merge mode, an empty or zero-width input, a bias flag
    /// set on a weight set carrying no bias, or a shape mismatch between
    /// tensors being combined.
    #[error("invalid configuration: {0}")]
    Configuration(String),
}

impl Error {
    pub fn unsupported_operation(message: impl Into<String>) -> Self {
        Self::UnsupportedOperation(message.into())
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }
}
