use thiserror::Error;

/// Errors returned while composing an outreach message.
#[derive(Debug, Error)]
pub enum OutreachError {
    /// The provider credential is missing or blank.
    #[error("AI provider not configured: {0}")]
    Configuration(String),

    /// The provider answered with a non-2xx status.
    #[error("AI provider returned HTTP {status}: {body}")]
    Provider { status: u16, body: String },

    /// The provider answered 2xx without the expected completion text.
    #[error("invalid AI provider response: {0}")]
    InvalidResponse(String),

    /// The request was rejected before any provider call.
    #[error("validation error: {0}")]
    Validation(String),

    /// Network, TLS or timeout failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl OutreachError {
    /// Whether a caller may reasonably retry the same request.
    ///
    /// Nothing in this crate retries; this only classifies the failure.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Provider { status, .. } => *status == 429 || (500..=599).contains(status),
            Self::Http(e) => e.is_timeout() || e.is_connect(),
            Self::Configuration(_) | Self::InvalidResponse(_) | Self::Validation(_) => false,
        }
    }

    /// Whether the provider call ran out of time.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Http(e) if e.is_timeout())
    }
}
