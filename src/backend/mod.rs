pub mod catalog;
pub mod error;
pub mod export;
pub mod loader;
pub mod parser;
pub mod record;
pub mod settings;

pub use catalog::{Catalog, SIMULATOR_GENRE};
pub use error::CatalogError;
pub use record::{Column, GameRecord, COLUMN_COUNT, TBA};
