use std::time::Duration;

use crate::error::StoreInfraError;

/// Retry budget for a single connection bootstrap call.
///
/// `deadline` bounds the whole call by wall clock, `max_attempts` bounds it
/// by count; whichever is spent first terminates the loop. The inter-attempt
/// delay is constant - this is startup connectivity, not a hot-path retry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    pub deadline: Duration,
    pub max_attempts: u32,
    pub retry_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            deadline: Duration::from_secs(30),
            max_attempts: 3,
            retry_delay: Duration::from_secs(5),
        }
    }
}

impl RetryPolicy {
    pub fn new(deadline: Duration, max_attempts: u32, retry_delay: Duration) -> Self {
        Self {
            deadline,
            max_attempts,
            retry_delay,
        }
    }

    /// Reject budgets that could never produce an attempt.
    pub fn validate(&self) -> Result<(), StoreInfraError> {
        if self.max_attempts < 1 {
            return Err(StoreInfraError::config(
                "retry policy requires max_attempts >= 1",
            ));
        }
        if self.deadline.is_zero() {
            return Err(StoreInfraError::config(
                "retry policy requires a non-zero deadline",
            ));
        }
        Ok(())
    }
}

/// Pool sizing threaded into the relational connect options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolSettings {
    pub pool_min: u32,
    pub pool_max: u32,
    pub acquire_timeout_ms: u64,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            pool_min: 1,
            pool_max: 10,
            acquire_timeout_ms: 2000,
        }
    }
}
