use thiserror::Error;

/// Terminal outcomes of a connection bootstrap call.
///
/// Per-attempt failures are logged and retried inside the loop; only these
/// variants reach the caller, and none of them is retried automatically.
/// Targets embedded here have already been password-masked.
#[derive(Debug, Error)]
pub enum StoreInfraError {
    #[error("Configuration error: {detail}")]
    Config { detail: String },

    #[error("Deadline exceeded connecting to {target} after {attempts} attempt(s): {last_cause}")]
    DeadlineExceeded {
        target: String,
        attempts: u32,
        last_cause: String,
    },

    #[error("Connection retries exhausted for {target} after {attempts} attempt(s): {last_cause}")]
    RetriesExhausted {
        target: String,
        attempts: u32,
        last_cause: String,
    },

    #[error("Connection to {target} cancelled after {attempts} attempt(s)")]
    Cancelled { target: String, attempts: u32 },
}

impl StoreInfraError {
    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }
}
