use crate::domain::entities::{CatalogueItem, Metadata};
use crate::domain::traits::{AddCatalogueItemInput, CatalogueService};

/// Command used by the application layer, decoupled from the service input
#[derive(Debug, Clone, PartialEq)]
pub struct AddCatalogueItemCommand {
    pub name: String,
    pub category: String,
    pub total_quantity: u32,
    pub metadata: Option<Metadata>,
}

impl AddCatalogueItemCommand {
    pub fn new(name: impl Into<String>, category: impl Into<String>, total_quantity: u32) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            total_quantity,
            metadata: None,
        }
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

impl From<AddCatalogueItemCommand> for AddCatalogueItemInput {
    fn from(command: AddCatalogueItemCommand) -> Self {
        Self {
            name: command.name,
            category: command.category,
            total_quantity: command.total_quantity,
            metadata: command.metadata,
        }
    }
}

/// Outcome of adding a catalogue item
#[derive(Debug, Clone, PartialEq)]
pub enum AddCatalogueItemResult {
    Success { catalogue_item: CatalogueItem },
    Failure { errors: Vec<String> },
}

impl AddCatalogueItemResult {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

/// Add a catalogue item through the given service
pub async fn add_catalogue_item(
    service: &dyn CatalogueService,
    command: AddCatalogueItemCommand,
) -> AddCatalogueItemResult {
    match service.add_catalogue_item(command.into()).await {
        Ok(output) => AddCatalogueItemResult::Success {
            catalogue_item: output.catalogue_item,
        },
        Err(e) => {
            tracing::debug!("Add catalogue item failed: {}", e);
            AddCatalogueItemResult::Failure {
                errors: vec![e.to_string()],
            }
        }
    }
}
