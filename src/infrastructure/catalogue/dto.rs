//! Wire-level shapes of the catalogue API

use serde::{Deserialize, Serialize};

use crate::domain::entities::{CatalogueItem, Metadata};
use crate::domain::traits::AddCatalogueItemInput;

/// Item as sent by the server
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CatalogueItemDto {
    pub id: String,
    pub name: String,
    pub category: String,
    pub total_quantity: u32,
    #[serde(default)]
    pub reserved_quantity: Option<u32>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub metadata: Option<Metadata>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl From<CatalogueItemDto> for CatalogueItem {
    fn from(dto: CatalogueItemDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            category: dto.category,
            total_quantity: dto.total_quantity,
            rating: dto.rating,
            reserved_quantity: dto.reserved_quantity,
            status: dto.status,
            metadata: dto.metadata,
            created_at: dto.created_at,
            updated_at: dto.updated_at,
        }
    }
}

/// Object form of the list response; `errors` is read separately
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ListEnvelopeDto {
    #[serde(default)]
    pub catalogue_items: Option<Vec<CatalogueItemDto>>,
    #[serde(default)]
    pub total_count: Option<usize>,
}

/// POST body; id and timestamps are never sent
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AddCatalogueItemRequestDto {
    pub name: String,
    pub category: String,
    pub total_quantity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl From<AddCatalogueItemInput> for AddCatalogueItemRequestDto {
    fn from(input: AddCatalogueItemInput) -> Self {
        Self {
            name: input.name,
            category: input.category,
            total_quantity: input.total_quantity,
            metadata: input.metadata,
        }
    }
}
