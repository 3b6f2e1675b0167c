/// Convenience result type used across clockface.
pub type ClockResult<T> = Result<T, ClockError>;

/// Top-level error taxonomy used by the renderer, encoder and driver.
#[derive(thiserror::Error, Debug)]
pub enum ClockError {
    /// Invalid user-provided arguments or options.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while rasterizing a clock face.
    #[error("render error: {0}")]
    Render(String),

    /// Errors while encoding frames into the animation file.
    #[error("encode error: {0}")]
    Encode(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ClockError {
    /// Build a [`ClockError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ClockError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`ClockError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Return `true` for errors caused by bad input rather than the environment.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
