//! Demo items the in-memory store can start with

use crate::domain::entities::CatalogueItem;

pub fn seed_catalogue_items() -> Vec<CatalogueItem> {
    vec![
        CatalogueItem::new("fet-laptop-001", "Laptop Computer", "Electronics", 50),
        CatalogueItem::new("fet-mouse-001", "Wireless Mouse", "Accessories", 200),
        CatalogueItem::new("fet-cable-001", "USB-C Cable", "Cables", 500),
        CatalogueItem::new("fet-keyboard-002", "Mechanical Keyboard", "Accessories", 75),
        CatalogueItem::new("fet-monitor-002", "4K Monitor", "Electronics", 30),
    ]
}
