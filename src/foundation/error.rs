pub type FramecastResult<T> = Result<T, FramecastError>;

#[derive(thiserror::Error, Debug)]
pub enum FramecastError {
    #[error("invalid duration: {0}")]
    InvalidDuration(String),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("measurement error: {0}")]
    Measurement(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FramecastError {
    pub fn invalid_duration(msg: impl Into<String>) -> Self {
        Self::InvalidDuration(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn measurement(msg: impl Into<String>) -> Self {
        Self::Measurement(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
