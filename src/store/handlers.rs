use diesel::prelude::*;
use diesel_async::{AsyncPgConnection, RunQueryDsl};

use super::models::NewStore;
use crate::schema::stores;

pub async fn delete_all(conn: &mut AsyncPgConnection) -> QueryResult<usize> {
    diesel::delete(stores::table).execute(conn).await
}

pub async fn upsert(conn: &mut AsyncPgConnection, store: &NewStore) -> QueryResult<bool> {
    let inserted = diesel::insert_into(stores::table)
        .values(store)
        .on_conflict(stores::id)
        .do_nothing()
        .execute(conn)
        .await?;

    Ok(inserted > 0)
}

pub async fn count(conn: &mut AsyncPgConnection) -> QueryResult<i64> {
    stores::table.count().get_result(conn).await
}

/// Moves the `id` sequence past the highest explicit id, or back to its start
/// when the table is empty.
pub async fn sync_id_sequence(conn: &mut AsyncPgConnection) -> QueryResult<()> {
    diesel::sql_query(
        "SELECT setval(pg_get_serial_sequence('stores', 'id'), \
         COALESCE(MAX(id), 1), MAX(id) IS NOT NULL) FROM stores",
    )
    .execute(conn)
    .await?;

    Ok(())
}
