/// Convenience result type used across dispmap.
pub type DispmapResult<T> = Result<T, DispmapError>;

/// Top-level error taxonomy used by the filter, overlay and session APIs.
#[derive(thiserror::Error, Debug)]
pub enum DispmapError {
    /// A parameter outside its legal domain (e.g. a component selector not in `0..=2`).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Raster sizes or channel layouts that do not line up.
    #[error("dimension mismatch: {0}")]
    DimensionMismatch(String),

    /// Invalid user-provided geometry or session configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DispmapError {
    /// Build a [`DispmapError::InvalidArgument`] value.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Build a [`DispmapError::DimensionMismatch`] value.
    pub fn dimension_mismatch(msg: impl Into<String>) -> Self {
        Self::DimensionMismatch(msg.into())
    }

    /// Build a [`DispmapError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
