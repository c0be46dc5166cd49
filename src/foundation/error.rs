/// Convenience result type used across the crate.
pub type StreamBorderResult<T> = Result<T, StreamBorderError>;

/// Error taxonomy for the fallible surfaces (configuration, painting, IO).
///
/// The animation core itself never fails: degenerate inputs resolve to "nothing drawn".
#[derive(thiserror::Error, Debug)]
pub enum StreamBorderError {
    /// Invalid user-provided configuration or style data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while rasterizing a frame.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StreamBorderError {
    /// Build a [`StreamBorderError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`StreamBorderError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`StreamBorderError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
