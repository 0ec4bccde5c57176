use std::time::Duration;

use diesel_async::{AsyncPgConnection, pooled_connection::AsyncDieselConnectionManager};
use tracing::debug;

use crate::utils::Pool;

/// Single-connection pool. Nothing is dialed until the first checkout, which
/// gives up after `connect_timeout`.
pub fn get_pool(db_url: &str, connect_timeout: Duration) -> Pool {
    let config = AsyncDieselConnectionManager::<AsyncPgConnection>::new(db_url);
    let pool = bb8::Pool::builder()
        .max_size(1)
        .connection_timeout(connect_timeout)
        .build_unchecked(config);

    debug!(?connect_timeout, "database pool ready");

    pool
}
