/// Convenience result type used across the crate.
pub type GaborResult<T> = Result<T, GaborError>;

/// Top-level error taxonomy used by generation and output APIs.
#[derive(thiserror::Error, Debug)]
pub enum GaborError {
    /// Envelope name is not one of the supported kinds.
    #[error("invalid envelope: \"{0}\" (expected one of gaussian, linear, sine, circle)")]
    InvalidEnvelope(String),

    /// Out-of-domain or missing patch parameter.
    #[error("validation error: {0}")]
    Validation(String),

    /// Color string that could not be resolved to an RGB triple.
    #[error("color error: {0}")]
    Color(String),

    /// Errors when deserializing a parameter document.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Filesystem failures (unwritable destination, unreadable config).
    #[error("io error: {0}")]
    Io(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GaborError {
    /// Build a [`GaborError::InvalidEnvelope`] value.
    pub fn invalid_envelope(name: impl Into<String>) -> Self {
        Self::InvalidEnvelope(name.into())
    }

    /// Build a [`GaborError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`GaborError::Color`] value.
    pub fn color(msg: impl Into<String>) -> Self {
        Self::Color(msg.into())
    }

    /// Build a [`GaborError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Build a [`GaborError::Io`] value.
    pub fn io(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    /// `true` for errors caused by the supplied parameters rather than the environment.
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            Self::InvalidEnvelope(_) | Self::Validation(_) | Self::Color(_) | Self::Serde(_)
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
