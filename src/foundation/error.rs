/// Convenience result type used across scrollreel.
pub type ReelResult<T> = Result<T, ReelError>;

/// Top-level error taxonomy used by resolver APIs.
///
/// Only [`ReelError::Sample`] and [`ReelError::Cue`] can occur after startup; every other
/// variant is raised while building a [`crate::Resolver`] or [`crate::ReelSession`].
#[derive(thiserror::Error, Debug)]
pub enum ReelError {
    /// Invalid phase layout, gallery, or text-window configuration.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Malformed keyframe control points.
    #[error("invalid curve: {0}")]
    InvalidCurve(String),

    /// Non-finite or non-positive scroll input rejected at the sample boundary.
    #[error("sample error: {0}")]
    Sample(String),

    /// Advisory failure reported by an audio cue sink.
    #[error("cue error: {0}")]
    Cue(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ReelError {
    /// Build a [`ReelError::Configuration`] value.
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Build a [`ReelError::InvalidCurve`] value.
    pub fn invalid_curve(msg: impl Into<String>) -> Self {
        Self::InvalidCurve(msg.into())
    }

    /// Build a [`ReelError::Sample`] value.
    pub fn sample(msg: impl Into<String>) -> Self {
        Self::Sample(msg.into())
    }

    /// Build a [`ReelError::Cue`] value.
    pub fn cue(msg: impl Into<String>) -> Self {
        Self::Cue(msg.into())
    }

    /// Build a [`ReelError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// True for errors that must stop startup rather than degrade a running reel.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Configuration(_) | Self::InvalidCurve(_))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
