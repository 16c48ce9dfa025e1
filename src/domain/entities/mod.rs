//! Domain entities - Core business objects with no external dependencies

pub mod catalogue_item;

pub use catalogue_item::{CatalogueItem, Metadata};
