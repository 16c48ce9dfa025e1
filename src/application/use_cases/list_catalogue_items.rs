use crate::domain::entities::CatalogueItem;
use crate::domain::traits::CatalogueService;

/// Outcome of listing catalogue items
#[derive(Debug, Clone, PartialEq)]
pub enum ListCatalogueItemsResult {
    Success {
        catalogue_items: Vec<CatalogueItem>,
        total_count: usize,
    },
    Failure {
        errors: Vec<String>,
    },
}

impl ListCatalogueItemsResult {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

/// List catalogue items through the given service
pub async fn list_catalogue_items(service: &dyn CatalogueService) -> ListCatalogueItemsResult {
    match service.list_catalogue_items().await {
        Ok(output) => ListCatalogueItemsResult::Success {
            catalogue_items: output.catalogue_items,
            total_count: output.total_count,
        },
        Err(e) => {
            tracing::debug!("List catalogue items failed: {}", e);
            ListCatalogueItemsResult::Failure {
                errors: vec![e.to_string()],
            }
        }
    }
}
