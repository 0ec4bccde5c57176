use diesel::prelude::*;

use crate::coerce::{self, CoerceError};
use crate::reader::Record;
use crate::schema::menu_categories;

#[derive(Insertable, Debug, Clone, PartialEq)]
#[diesel(table_name = menu_categories)]
pub struct NewMenuCategory {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub sort_order: i32,
    pub store_id: i32,
}

impl NewMenuCategory {
    pub fn from_record(record: &Record) -> Result<Self, CoerceError> {
        Ok(Self {
            id: coerce::integer(record, "id")?,
            name: coerce::text(record, "name")?,
            description: coerce::optional_text(record, "description"),
            sort_order: coerce::integer(record, "order")?,
            store_id: coerce::integer(record, "storeId")?,
        })
    }
}
