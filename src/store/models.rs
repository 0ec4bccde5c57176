use diesel::prelude::*;

use crate::coerce::{self, CoerceError};
use crate::reader::Record;
use crate::schema::stores;

#[derive(Insertable, Debug, Clone, PartialEq)]
#[diesel(table_name = stores)]
pub struct NewStore {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub logo_url: Option<String>,
    pub business_hours: Option<String>,
    pub owner_id: String,
}

impl NewStore {
    pub fn from_record(record: &Record) -> Result<Self, CoerceError> {
        Ok(Self {
            id: coerce::integer(record, "id")?,
            name: coerce::text(record, "name")?,
            description: coerce::optional_text(record, "description"),
            address: coerce::optional_text(record, "address"),
            phone: coerce::optional_text(record, "phone"),
            logo_url: coerce::optional_text(record, "logoUrl"),
            business_hours: coerce::optional_text(record, "businessHours"),
            owner_id: coerce::text(record, "ownerId")?,
        })
    }
}
