use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("inference endpoint returned {status}: {message}")]
    UpstreamStatus { status: u16, message: String },

    #[error("inference endpoint did not respond within {timeout_secs}s")]
    UpstreamTimeout { timeout_secs: u64 },

    #[error("{0}")]
    ExternalServiceError(String),

    #[error("{0}")]
    Internal(String),
}
