use crate::domain::signup_email::SignupEmail;
use async_trait::async_trait;

/// Fallback copy when a rejection response carries no message of its own.
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

/// Copy shown when the request never completed.
pub const CONNECTION_ERROR_MESSAGE: &str = "Connection error. Please try again later.";

#[derive(thiserror::Error)]
pub enum SignupError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Server(String),
    #[error("{0}")]
    Network(String),
}

impl std::fmt::Debug for SignupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

#[async_trait]
pub trait SignupClient {
    /// Deliver one signup request for the given address. Exactly one request
    /// leaves per call; there are no retries at this layer.
    async fn submit(&self, email: &SignupEmail) -> Result<(), SignupError>;
}

pub fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}
