/// Convenience result alias used throughout the crate.
pub type RtvidResult<T> = Result<T, RtvidError>;

/// Errors surfaced by the frame pipeline and its collaborators.
#[derive(thiserror::Error, Debug)]
pub enum RtvidError {
    /// Invalid configuration or contract input.
    #[error("validation error: {0}")]
    Validation(String),

    /// Sample storage for a frame could not be allocated.
    #[error("resource exhaustion: {0}")]
    ResourceExhaustion(String),

    /// A reporting sink failed to deliver a record.
    #[error("report error: {0}")]
    Report(String),

    /// The report stream's reader went away (broken pipe). Ends a run early without failing it.
    #[error("report sink closed: {0}")]
    SinkClosed(String),

    /// Config or report (de)serialization failed.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Any other error, passed through unchanged.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RtvidError {
    /// Build a [`RtvidError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`RtvidError::ResourceExhaustion`].
    pub fn resource_exhaustion(msg: impl Into<String>) -> Self {
        Self::ResourceExhaustion(msg.into())
    }

    /// Build a [`RtvidError::Report`].
    pub fn report(msg: impl Into<String>) -> Self {
        Self::Report(msg.into())
    }

    /// Build a [`RtvidError::SinkClosed`].
    pub fn sink_closed(msg: impl Into<String>) -> Self {
        Self::SinkClosed(msg.into())
    }

    /// Build a [`RtvidError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
