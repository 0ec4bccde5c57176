use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::coerce::{self, CoerceError, TimestampColumns};
use crate::reader::Record;
use crate::schema::users;

#[derive(Insertable, Debug, Clone, PartialEq)]
#[diesel(table_name = users)]
pub struct NewUser {
    pub id: String,
    pub public_id: Option<String>,
    pub email: String,
    pub display_name: Option<String>,
    pub role: String,
    /// `None` inserts the column default.
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

impl NewUser {
    pub fn from_record(record: &Record, stamps: &TimestampColumns) -> Result<Self, CoerceError> {
        let timestamps = stamps.extract(record)?;

        Ok(Self {
            id: coerce::text(record, "id")?,
            public_id: coerce::optional_text(record, "publicId"),
            email: coerce::text(record, "email")?,
            display_name: coerce::optional_text(record, "displayName"),
            role: coerce::text(record, "role")?,
            created_at: timestamps.created_at,
            updated_at: timestamps.updated_at,
        })
    }
}
