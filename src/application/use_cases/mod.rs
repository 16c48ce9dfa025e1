//! Use cases - Thin orchestration over a CatalogueService
//!
//! Use cases never return `Err`; the result tag is the only failure signal.

pub mod add_catalogue_item;
pub mod list_catalogue_items;

pub use add_catalogue_item::{add_catalogue_item, AddCatalogueItemCommand, AddCatalogueItemResult};
pub use list_catalogue_items::{list_catalogue_items, ListCatalogueItemsResult};
