use async_trait::async_trait;

use crate::application::errors::CatalogueError;
use crate::domain::entities::{CatalogueItem, Metadata};

/// Items as returned by a list call, with the store's total count
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListCatalogueItemsOutput {
    pub catalogue_items: Vec<CatalogueItem>,
    pub total_count: usize,
}

/// Fields a caller may supply when adding an item
///
/// Id and timestamps are always assigned by the service.
#[derive(Debug, Clone, PartialEq)]
pub struct AddCatalogueItemInput {
    pub name: String,
    pub category: String,
    pub total_quantity: u32,
    pub metadata: Option<Metadata>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AddCatalogueItemOutput {
    pub catalogue_item: CatalogueItem,
}

/// CatalogueService trait - abstraction over the catalogue store
#[async_trait]
pub trait CatalogueService: Send + Sync {
    /// List all items. An empty store is not an error.
    async fn list_catalogue_items(&self) -> Result<ListCatalogueItemsOutput, CatalogueError>;

    /// Add a new item, returning it as stored
    async fn add_catalogue_item(
        &self,
        input: AddCatalogueItemInput,
    ) -> Result<AddCatalogueItemOutput, CatalogueError>;
}
