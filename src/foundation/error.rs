/// Result alias used across the crate.
pub type BoundsResult<T> = Result<T, BoundsError>;

/// Errors raised around the resolver: documents, properties and timelines.
///
/// [`crate::resolve`] itself is a pure transform and never produces one of these.
#[derive(thiserror::Error, Debug)]
pub enum BoundsError {
    /// Structural problem in caller-supplied data (indices, names, ordering).
    #[error("validation error: {0}")]
    Validation(String),

    /// Unknown edge property or a value of the wrong kind.
    #[error("property error: {0}")]
    Property(String),

    /// Invalid keyframes or a track that cannot be applied.
    #[error("animation error: {0}")]
    Animation(String),

    /// JSON encode/decode failure.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Any other error, wrapped.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BoundsError {
    /// Build a [`BoundsError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`BoundsError::Property`] value.
    pub fn property(msg: impl Into<String>) -> Self {
        Self::Property(msg.into())
    }

    /// Build a [`BoundsError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`BoundsError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
