use diesel_async::{AsyncPgConnection, pooled_connection::AsyncDieselConnectionManager};

use super::error::SeedError;

pub type Pool = bb8::Pool<AsyncDieselConnectionManager<AsyncPgConnection>>;

pub type Result<T> = std::result::Result<T, SeedError>;
