//! Domain traits - Abstractions for infrastructure implementations

pub mod catalogue_service;

pub use catalogue_service::{
    AddCatalogueItemInput, AddCatalogueItemOutput, CatalogueService, ListCatalogueItemsOutput,
};
