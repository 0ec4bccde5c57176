//! Seed pipeline for the QR menu database.

pub mod category;
pub mod cli;
pub mod coerce;
pub mod config;
pub mod item;
pub mod pool;
pub mod reader;
pub mod repository;
pub mod schema;
pub mod seed;
pub mod store;
pub mod user;
pub mod utils;

pub use config::{EntityKind, SeedConfig};
pub use seed::{SeedReport, run};
pub use utils::{Result, SeedError};
