#![allow(dead_code)]

use std::fs;
use std::path::Path;

use qr_menu::SeedConfig;
use tempfile::TempDir;

pub const USER_HEADER: &str = "id,publicId,email,displayName,role,createdAt,updatedAt\n";
pub const STORE_HEADER: &str = "id,name,description,address,phone,logoUrl,businessHours,ownerId\n";
pub const CATEGORY_HEADER: &str = "id,name,description,order,storeId\n";
pub const ITEM_HEADER: &str = "id,name,description,price,imageUrl,order,categoryId,storeId\n";

pub struct Fixture {
    pub dir: TempDir,
}

impl Fixture {
    pub fn new(users: &str, stores: &str, categories: &str, items: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "user.csv", users);
        write(dir.path(), "store.csv", stores);
        write(dir.path(), "menucategory.csv", categories);
        write(dir.path(), "menuitem.csv", items);
        Self { dir }
    }

    pub fn headers_only() -> Self {
        Self::new(USER_HEADER, STORE_HEADER, CATEGORY_HEADER, ITEM_HEADER)
    }

    pub fn single_menu() -> Self {
        Self::new(
            &format!(
                "{USER_HEADER}u1,pub_1,owner@lamesa.example,Ana,owner,1700000000000,1700000000000\n"
            ),
            &format!("{STORE_HEADER}1,La Mesa,Tapas bar,12 Harbour St,,,Mon-Sat,u1\n"),
            &format!("{CATEGORY_HEADER}10,Tapas,,1,1\n"),
            &format!("{ITEM_HEADER}100,Croquetas,,7.25,,1,10,1\n"),
        )
    }

    pub fn config(&self) -> SeedConfig {
        SeedConfig::new(self.dir.path())
    }
}

fn write(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

/// u1 plus a store owned by a user that does not exist.
pub fn orphan_store() -> Fixture {
    Fixture::new(
        &format!("{USER_HEADER}u1,,a@x.example,,owner,0,0\n"),
        &format!("{STORE_HEADER}1,Orphan,,,,,,ghost\n"),
        CATEGORY_HEADER,
        ITEM_HEADER,
    )
}
