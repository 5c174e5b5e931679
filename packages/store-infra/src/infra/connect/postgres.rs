use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::config::{PoolSettings, RetryPolicy};
use crate::error::StoreInfraError;
use crate::infra::connect::core::{connect_with_retry, sanitize_db_url};

/// Connect to Postgres and prove the target is reachable before handing the
/// pool back.
///
/// The sqlx pool underneath establishes physical connections on demand, so
/// `Database::connect` can succeed against an unreachable host. The explicit
/// `ping` inside the dial keeps such failures inside the retry window.
pub async fn connect_postgres(
    url: &str,
    policy: &RetryPolicy,
    pool: &PoolSettings,
    cancel: &CancellationToken,
) -> Result<DatabaseConnection, StoreInfraError> {
    let mut opt = ConnectOptions::new(url);
    opt.min_connections(pool.pool_min)
        .max_connections(pool.pool_max)
        .acquire_timeout(Duration::from_millis(pool.acquire_timeout_ms))
        .sqlx_logging(true);

    info!(
        "pool=connecting engine=postgres target={} min={} max={} acquire_timeout_ms={}",
        sanitize_db_url(url),
        pool.pool_min,
        pool.pool_max,
        pool.acquire_timeout_ms
    );

    connect_with_retry(url, policy, cancel, || {
        let opt = opt.clone();
        async move {
            let conn = Database::connect(opt).await?;
            conn.ping().await?;
            Ok::<_, sea_orm::DbErr>(conn)
        }
    })
    .await
}
