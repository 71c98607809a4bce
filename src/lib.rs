//! Loads a five-column CSV catalog of video games and answers genre and
//! publisher queries over it.

pub mod backend;

pub use backend::{Catalog, CatalogError, GameRecord};
