//! UI-facing catalogue state
//!
//! Holds the last fetched items alongside loading/adding flags and the
//! last error message. A fetch or add triggered while one of the same
//! kind is still outstanding is ignored.

use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::RwLock;

use crate::application::services::CatalogueUses;
use crate::application::use_cases::{
    AddCatalogueItemCommand, AddCatalogueItemResult, ListCatalogueItemsResult,
};
use crate::domain::entities::CatalogueItem;

/// Copy of the state at one point in time
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogueSnapshot {
    pub catalogue_items: Vec<CatalogueItem>,
    pub total_count: usize,
    pub loading: bool,
    pub adding: bool,
    pub error: Option<String>,
}

#[derive(Debug, Default)]
struct Listing {
    catalogue_items: Vec<CatalogueItem>,
    total_count: usize,
    error: Option<String>,
}

/// Clears its flag when dropped
struct InFlight<'a>(&'a AtomicBool);

impl<'a> InFlight<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Reactive-style state wrapping the catalogue use cases
pub struct CatalogueItemsState {
    uses: CatalogueUses,
    listing: RwLock<Listing>,
    loading: AtomicBool,
    adding: AtomicBool,
}

impl CatalogueItemsState {
    pub fn new(uses: CatalogueUses) -> Self {
        Self {
            uses,
            listing: RwLock::new(Listing::default()),
            loading: AtomicBool::new(false),
            adding: AtomicBool::new(false),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::Acquire)
    }

    pub fn is_adding(&self) -> bool {
        self.adding.load(Ordering::Acquire)
    }

    pub async fn snapshot(&self) -> CatalogueSnapshot {
        let listing = self.listing.read().await;
        CatalogueSnapshot {
            catalogue_items: listing.catalogue_items.clone(),
            total_count: listing.total_count,
            loading: self.is_loading(),
            adding: self.is_adding(),
            error: listing.error.clone(),
        }
    }

    /// Reload the item list. Returns `false` if a fetch was already running.
    pub async fn fetch_catalogue_items(&self) -> bool {
        let Some(_guard) = InFlight::acquire(&self.loading) else {
            tracing::debug!("Fetch already in flight, skipping");
            return false;
        };
        self.listing.write().await.error = None;

        let result = self.uses.list_catalogue_items().await;

        let mut listing = self.listing.write().await;
        match result {
            ListCatalogueItemsResult::Success { catalogue_items, total_count } => {
                listing.catalogue_items = catalogue_items;
                listing.total_count = total_count;
            }
            ListCatalogueItemsResult::Failure { errors } => {
                listing.error = Some(errors.join("; "));
                listing.catalogue_items.clear();
                listing.total_count = 0;
            }
        }
        true
    }

    /// Add an item and prepend it on success. Returns `false` if an add was
    /// already running.
    pub async fn add_catalogue_item(&self, command: AddCatalogueItemCommand) -> bool {
        let Some(_guard) = InFlight::acquire(&self.adding) else {
            tracing::debug!("Add already in flight, skipping");
            return false;
        };
        self.listing.write().await.error = None;

        let result = self.uses.add_catalogue_item(command).await;

        let mut listing = self.listing.write().await;
        match result {
            AddCatalogueItemResult::Success { catalogue_item } => {
                listing.catalogue_items.insert(0, catalogue_item);
                listing.total_count = (listing.total_count + 1).max(listing.catalogue_items.len());
            }
            AddCatalogueItemResult::Failure { errors } => {
                listing.error = Some(errors.join("; "));
            }
        }
        true
    }
}
