//! Application services - Use cases bound to an injected service

pub mod catalogue_state;
pub mod catalogue_uses;

pub use catalogue_state::{CatalogueItemsState, CatalogueSnapshot};
pub use catalogue_uses::CatalogueUses;
