use thiserror::Error;

pub type ManagementResult<T> = Result<T, ManagementError>;

#[derive(Debug, Error)]
pub enum ManagementError {
    #[error("Invalid Auth0 domain {domain:?}: {reason}")]
    InvalidDomain { domain: String, reason: String },

    #[error("Missing client credentials: {0}")]
    MissingCredentials(String),

    #[error("Failed to build HTTP transport: {0}")]
    TransportError(#[source] reqwest::Error),

    #[error("Invalid API path {path:?}: {reason}")]
    InvalidPath { path: String, reason: String },

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("OAuth error: {0}")]
    OAuthError(String),

    #[error("Authentication failed: {0}")]
    AuthenticationError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Rate limited: retry after {retry_after_seconds}s")]
    RateLimited { retry_after_seconds: u64 },

    #[error("Auth0 API error: {status} - {message}")]
    ApiError { status: u16, message: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error)
}

impl ManagementError {
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::HttpError(_) | Self::RateLimited { .. })
    }

    pub fn retry_after(&self) -> Option<u64> {
        if let Self::RateLimited {
            retry_after_seconds
        } = self
        {
            Some(*retry_after_seconds)
        } else {
            None
        }
    }

    /// True for errors raised while building the client, before any request.
    pub fn is_construction_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidDomain { .. } | Self::MissingCredentials(_) | Self::TransportError(_)
        )
    }
}
