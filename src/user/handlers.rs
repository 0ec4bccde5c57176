use diesel::prelude::*;
use diesel_async::{AsyncPgConnection, RunQueryDsl};

use super::models::NewUser;
use crate::schema::users;

pub async fn delete_all(conn: &mut AsyncPgConnection) -> QueryResult<usize> {
    diesel::delete(users::table).execute(conn).await
}

/// Inserts the user unless its id already exists. Returns whether a row was written.
pub async fn upsert(conn: &mut AsyncPgConnection, user: &NewUser) -> QueryResult<bool> {
    let inserted = diesel::insert_into(users::table)
        .values(user)
        .on_conflict(users::id)
        .do_nothing()
        .execute(conn)
        .await?;

    Ok(inserted > 0)
}

pub async fn count(conn: &mut AsyncPgConnection) -> QueryResult<i64> {
    users::table.count().get_result(conn).await
}
