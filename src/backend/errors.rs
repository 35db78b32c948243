use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("Invalid service url: {0}")]
    InvalidUrl(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Service responded with {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("Decode error: {0}")]
    Decode(String),
}

pub type BackendResult<T> = Result<T, BackendError>;

impl From<reqwest::Error> for BackendError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            BackendError::Decode(err.to_string())
        } else if err.is_builder() {
            BackendError::InvalidUrl(err.to_string())
        } else {
            BackendError::Transport(err.to_string())
        }
    }
}
