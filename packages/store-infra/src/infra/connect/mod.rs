pub mod core;
pub mod mongo;
pub mod postgres;

pub use self::core::{connect_with_retry, sanitize_db_url};
pub use mongo::connect_mongo;
pub use postgres::connect_postgres;
