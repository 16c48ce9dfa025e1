use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque key-value metadata attached to an item
pub type Metadata = serde_json::Map<String, serde_json::Value>;

/// A named, categorized inventory record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogueItem {
    pub id: String,
    pub name: String,
    pub category: String,
    pub total_quantity: u32,
    pub rating: Option<f64>,
    pub reserved_quantity: Option<u32>,
    pub status: Option<String>,
    pub metadata: Option<Metadata>,
    /// ISO-8601, passed through as received
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl CatalogueItem {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        total_quantity: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            total_quantity,
            rating: None,
            reserved_quantity: None,
            status: None,
            metadata: None,
            created_at: None,
            updated_at: None,
        }
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn with_reserved_quantity(mut self, reserved: u32) -> Self {
        self.reserved_quantity = Some(reserved);
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    pub fn with_timestamps(mut self, created_at: impl Into<String>, updated_at: impl Into<String>) -> Self {
        self.created_at = Some(created_at.into());
        self.updated_at = Some(updated_at.into());
        self
    }
}

impl fmt::Display for CatalogueItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) x{}", self.name, self.category, self.total_quantity)
    }
}
