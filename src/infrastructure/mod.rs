//! Infrastructure layer - External concerns
//! 
//! This layer contains:
//! - Config: Configuration loading
//! - Catalogue: CatalogueService implementations (in-memory, HTTP) and the factory

pub mod catalogue;
pub mod config;
