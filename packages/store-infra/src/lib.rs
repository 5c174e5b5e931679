//! Resilient connection bootstrap for the stateful stores (Postgres and
//! MongoDB), plus the process logging setup. Used by services and
//! operational CLIs at startup.

pub mod config;
pub mod error;
pub mod infra;

pub use config::{PoolSettings, RetryPolicy};
pub use error::StoreInfraError;
pub use infra::connect::{connect_mongo, connect_postgres, connect_with_retry, sanitize_db_url};
pub use infra::logging::{init_logging, init_logging_in, LogSink};
