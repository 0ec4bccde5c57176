pub mod error;
pub mod types;

pub use error::SeedError;
pub use types::{Pool, Result};
