use mongodb::bson::doc;
use mongodb::{Client, Database};
use tokio_util::sync::CancellationToken;

use crate::config::RetryPolicy;
use crate::error::StoreInfraError;
use crate::infra::connect::core::connect_with_retry;

/// Connect to MongoDB and hand back the client plus a handle on `db_name`.
///
/// The driver builds clients lazily and only touches the deployment on the
/// first operation, so the dial runs a `ping` against `admin` - connection
/// failures must surface here, inside the retry window, not on first use.
pub async fn connect_mongo(
    url: &str,
    db_name: &str,
    policy: &RetryPolicy,
    cancel: &CancellationToken,
) -> Result<(Client, Database), StoreInfraError> {
    if db_name.is_empty() {
        return Err(StoreInfraError::config("missing MongoDB database name"));
    }

    let client = connect_with_retry(url, policy, cancel, || async move {
        let client = Client::with_uri_str(url).await?;
        client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await?;
        Ok::<_, mongodb::error::Error>(client)
    })
    .await?;

    let db = client.database(db_name);
    Ok((client, db))
}
