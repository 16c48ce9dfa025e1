//! Domain layer - Core catalogue model with no transport concerns
//! 
//! This layer contains:
//! - Entities: Core business objects (CatalogueItem)
//! - Traits: Abstractions for infrastructure (CatalogueService)

pub mod entities;
pub mod traits;
