use std::sync::Arc;

use crate::application::use_cases::{
    self, AddCatalogueItemCommand, AddCatalogueItemResult, ListCatalogueItemsResult,
};
use crate::domain::traits::CatalogueService;

/// Both catalogue use cases bound to one service
#[derive(Clone)]
pub struct CatalogueUses {
    service: Arc<dyn CatalogueService>,
}

impl CatalogueUses {
    pub fn new(service: Arc<dyn CatalogueService>) -> Self {
        Self { service }
    }

    pub async fn list_catalogue_items(&self) -> ListCatalogueItemsResult {
        use_cases::list_catalogue_items(self.service.as_ref()).await
    }

    pub async fn add_catalogue_item(&self, command: AddCatalogueItemCommand) -> AddCatalogueItemResult {
        use_cases::add_catalogue_item(self.service.as_ref(), command).await
    }
}
