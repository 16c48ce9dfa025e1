//! catalogue-desk - List and add catalogue items against an in-memory or HTTP store

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::errors::{CatalogueError, ConfigError};
pub use application::services::{CatalogueItemsState, CatalogueSnapshot, CatalogueUses};
pub use application::use_cases::{
    add_catalogue_item, list_catalogue_items, AddCatalogueItemCommand, AddCatalogueItemResult,
    ListCatalogueItemsResult,
};
pub use domain::entities::{CatalogueItem, Metadata};
pub use domain::traits::{
    AddCatalogueItemInput, AddCatalogueItemOutput, CatalogueService, ListCatalogueItemsOutput,
};
