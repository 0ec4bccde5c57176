use diesel::prelude::*;
use diesel_async::{AsyncPgConnection, RunQueryDsl};

use super::models::NewMenuCategory;
use crate::schema::menu_categories;

pub async fn delete_all(conn: &mut AsyncPgConnection) -> QueryResult<usize> {
    diesel::delete(menu_categories::table).execute(conn).await
}

pub async fn upsert(conn: &mut AsyncPgConnection, category: &NewMenuCategory) -> QueryResult<bool> {
    let inserted = diesel::insert_into(menu_categories::table)
        .values(category)
        .on_conflict(menu_categories::id)
        .do_nothing()
        .execute(conn)
        .await?;

    Ok(inserted > 0)
}

pub async fn count(conn: &mut AsyncPgConnection) -> QueryResult<i64> {
    menu_categories::table.count().get_result(conn).await
}

/// Moves the `id` sequence past the highest explicit id, or back to its start
/// when the table is empty.
pub async fn sync_id_sequence(conn: &mut AsyncPgConnection) -> QueryResult<()> {
    diesel::sql_query(
        "SELECT setval(pg_get_serial_sequence('menu_categories', 'id'), \
         COALESCE(MAX(id), 1), MAX(id) IS NOT NULL) FROM menu_categories",
    )
    .execute(conn)
    .await?;

    Ok(())
}
