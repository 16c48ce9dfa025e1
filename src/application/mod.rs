//! Application layer - Use cases and business logic
//! 
//! This layer contains:
//! - Use cases: One business operation each, normalized to tagged results
//! - Services: Use cases bound to a service, UI-facing state
//! - Errors: Catalogue and configuration errors

pub mod errors;
pub mod services;
pub mod use_cases;
