use std::{fmt, path::PathBuf};

use serde::Serialize;

use crate::coerce::TimestampPolicy;

pub const DEFAULT_DATA_DIR: &str = "seed-data";

/// The four tables the pipeline reloads, in parent-to-child order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum EntityKind {
    User,
    Store,
    MenuCategory,
    MenuItem,
}

impl EntityKind {
    /// Insertion order: every parent before its children.
    pub const LOAD_ORDER: [Self; 4] = [
        Self::User,
        Self::Store,
        Self::MenuCategory,
        Self::MenuItem,
    ];

    /// Deletion order: children before parents.
    pub const CLEAR_ORDER: [Self; 4] = [
        Self::MenuItem,
        Self::MenuCategory,
        Self::Store,
        Self::User,
    ];

    pub const fn file_name(self) -> &'static str {
        match self {
            Self::User => "user.csv",
            Self::Store => "store.csv",
            Self::MenuCategory => "menucategory.csv",
            Self::MenuItem => "menuitem.csv",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Store => "store",
            Self::MenuCategory => "menu category",
            Self::MenuItem => "menu item",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone)]
pub struct SeedConfig {
    pub data_dir: PathBuf,
    pub timestamps: TimestampPolicy,
}

impl SeedConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            timestamps: TimestampPolicy::default(),
        }
    }

    pub fn with_timestamps(mut self, timestamps: TimestampPolicy) -> Self {
        self.timestamps = timestamps;
        self
    }

    pub fn source_path(&self, kind: EntityKind) -> PathBuf {
        self.data_dir.join(kind.file_name())
    }
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_DIR)
    }
}
