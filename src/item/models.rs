use diesel::prelude::*;

use crate::coerce::{self, CoerceError};
use crate::reader::Record;
use crate::schema::menu_items;

#[derive(Insertable, Debug, Clone, PartialEq)]
#[diesel(table_name = menu_items)]
pub struct NewMenuItem {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub image_url: Option<String>,
    pub sort_order: i32,
    pub category_id: i32,
    /// Denormalized from the category.
    pub store_id: i32,
}

impl NewMenuItem {
    pub fn from_record(record: &Record) -> Result<Self, CoerceError> {
        Ok(Self {
            id: coerce::integer(record, "id")?,
            name: coerce::text(record, "name")?,
            description: coerce::optional_text(record, "description"),
            price: coerce::float(record, "price")?,
            image_url: coerce::optional_text(record, "imageUrl"),
            sort_order: coerce::integer(record, "order")?,
            category_id: coerce::integer(record, "categoryId")?,
            store_id: coerce::integer(record, "storeId")?,
        })
    }
}
