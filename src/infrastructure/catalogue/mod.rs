//! Catalogue service implementations - In-memory and HTTP

pub mod dto;
pub mod factory;
pub mod fake;
pub mod http;
pub mod seed;
pub mod transport;


pub use factory::create_catalogue_service;
pub use fake::FakeCatalogueService;
pub use http::{HttpCatalogueService, HttpCatalogueServiceOptions};
pub use seed::seed_catalogue_items;
pub use transport::{HttpMethod, HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};
