use diesel::prelude::*;
use diesel_async::{AsyncPgConnection, RunQueryDsl};

use super::models::NewMenuItem;
use crate::schema::menu_items;

pub async fn delete_all(conn: &mut AsyncPgConnection) -> QueryResult<usize> {
    diesel::delete(menu_items::table).execute(conn).await
}

pub async fn upsert(conn: &mut AsyncPgConnection, item: &NewMenuItem) -> QueryResult<bool> {
    let inserted = diesel::insert_into(menu_items::table)
        .values(item)
        .on_conflict(menu_items::id)
        .do_nothing()
        .execute(conn)
        .await?;

    Ok(inserted > 0)
}

pub async fn count(conn: &mut AsyncPgConnection) -> QueryResult<i64> {
    menu_items::table.count().get_result(conn).await
}

/// Moves the `id` sequence past the highest explicit id, or back to its start
/// when the table is empty.
pub async fn sync_id_sequence(conn: &mut AsyncPgConnection) -> QueryResult<()> {
    diesel::sql_query(
        "SELECT setval(pg_get_serial_sequence('menu_items', 'id'), \
         COALESCE(MAX(id), 1), MAX(id) IS NOT NULL) FROM menu_items",
    )
    .execute(conn)
    .await?;

    Ok(())
}
