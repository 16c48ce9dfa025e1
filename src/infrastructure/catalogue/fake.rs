//! In-memory catalogue store for development and tests

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::application::errors::CatalogueError;
use crate::domain::entities::CatalogueItem;
use crate::domain::traits::{
    AddCatalogueItemInput, AddCatalogueItemOutput, CatalogueService, ListCatalogueItemsOutput,
};
use crate::infrastructure::catalogue::seed_catalogue_items;

struct Inventory {
    items: Vec<CatalogueItem>,
    id_counter: usize,
}

impl Inventory {
    fn next_id(&mut self) -> String {
        self.id_counter += 1;
        format!("ci_{}", self.id_counter)
    }
}

/// Newest-first in-memory store with sequential `ci_<n>` ids
pub struct FakeCatalogueService {
    inventory: Arc<RwLock<Inventory>>,
}

impl FakeCatalogueService {
    pub fn new(initial: Vec<CatalogueItem>) -> Self {
        let id_counter = initial.len();
        Self {
            inventory: Arc::new(RwLock::new(Inventory {
                items: initial,
                id_counter,
            })),
        }
    }

    pub fn with_seed_data() -> Self {
        Self::new(seed_catalogue_items())
    }
}

impl Default for FakeCatalogueService {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[async_trait]
impl CatalogueService for FakeCatalogueService {
    async fn list_catalogue_items(&self) -> Result<ListCatalogueItemsOutput, CatalogueError> {
        let inventory = self.inventory.read().await;
        Ok(ListCatalogueItemsOutput {
            catalogue_items: inventory.items.clone(),
            total_count: inventory.items.len(),
        })
    }

    async fn add_catalogue_item(
        &self,
        input: AddCatalogueItemInput,
    ) -> Result<AddCatalogueItemOutput, CatalogueError> {
        let mut inventory = self.inventory.write().await;
        let now = Utc::now().to_rfc3339();
        let mut item = CatalogueItem::new(inventory.next_id(), input.name, input.category, input.total_quantity)
            .with_reserved_quantity(0)
            .with_rating(0.0)
            .with_timestamps(now.clone(), now);
        item.metadata = input.metadata;

        tracing::debug!("Fake store added {}", item.id);
        inventory.items.insert(0, item.clone());
        Ok(AddCatalogueItemOutput { catalogue_item: item })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Metadata;

    fn input(name: &str) -> AddCatalogueItemInput {
        AddCatalogueItemInput {
            name: name.to_string(),
            category: "Misc".to_string(),
            total_quantity: 1,
            metadata: None,
        }
    }

    #[tokio::test]
    async fn test_empty_store_lists_nothing() {
        let store = FakeCatalogueService::default();
        let output = store.list_catalogue_items().await.unwrap();
        assert!(output.catalogue_items.is_empty());
        assert_eq!(output.total_count, 0);
    }

    #[tokio::test]
    async fn test_added_item_is_listed_first() {
        let store = FakeCatalogueService::with_seed_data();
        let before = store.list_catalogue_items().await.unwrap().total_count;

        let added = store.add_catalogue_item(input("Lamp")).await.unwrap().catalogue_item;
        let after = store.list_catalogue_items().await.unwrap();

        assert_eq!(after.catalogue_items[0], added);
        assert_eq!(after.total_count, before + 1);
    }

    #[tokio::test]
    async fn test_ids_continue_from_initial_count() {
        let store = FakeCatalogueService::with_seed_data();

        let first = store.add_catalogue_item(input("A")).await.unwrap().catalogue_item;
        let second = store.add_catalogue_item(input("B")).await.unwrap().catalogue_item;
        let third = store.add_catalogue_item(input("C")).await.unwrap().catalogue_item;

        assert_eq!(first.id, "ci_6");
        assert_eq!(second.id, "ci_7");
        assert_eq!(third.id, "ci_8");
    }

    #[tokio::test]
    async fn test_ids_unique_under_concurrent_adds() {
        let store = Arc::new(FakeCatalogueService::default());
        let mut handles = Vec::new();
        for i in 0..20 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store.add_catalogue_item(input(&format!("item-{}", i))).await.unwrap().catalogue_item.id
            }));
        }

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap());
        }
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 20);
    }

    #[tokio::test]
    async fn test_defaults_assigned_on_add() {
        let store = FakeCatalogueService::default();
        let mut metadata = Metadata::new();
        metadata.insert("colour".into(), serde_json::json!("red"));

        let item = store
            .add_catalogue_item(AddCatalogueItemInput {
                metadata: Some(metadata.clone()),
                ..input("Lamp")
            })
            .await
            .unwrap()
            .catalogue_item;

        assert_eq!(item.reserved_quantity, Some(0));
        assert_eq!(item.rating, Some(0.0));
        assert!(item.status.is_none());
        assert_eq!(item.metadata, Some(metadata));
        assert!(item.created_at.is_some());
        assert_eq!(item.created_at, item.updated_at);
    }

    #[tokio::test]
    async fn test_list_returns_a_copy() {
        let store = FakeCatalogueService::with_seed_data();

        let mut output = store.list_catalogue_items().await.unwrap();
        output.catalogue_items.clear();
        output.catalogue_items.push(CatalogueItem::new("x", "X", "X", 0));

        let again = store.list_catalogue_items().await.unwrap();
        assert_eq!(again.total_count, 5);
        assert_eq!(again.catalogue_items[0].id, "fet-laptop-001");
    }
}
