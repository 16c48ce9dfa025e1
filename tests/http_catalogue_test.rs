//! HttpCatalogueService against a mock HTTP server
//! Run with: cargo test --test http_catalogue_test

use std::sync::{Arc, Once};

use httpmock::prelude::*;
use serde_json::json;

use catalogue_desk::infrastructure::catalogue::{HttpCatalogueService, HttpCatalogueServiceOptions};
use catalogue_desk::{
    AddCatalogueItemCommand, AddCatalogueItemInput, AddCatalogueItemResult, CatalogueItemsState,
    CatalogueService, CatalogueUses, ListCatalogueItemsResult,
};

static INIT: Once = Once::new();

fn ensure_init() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    });
}

fn http_service(server: &MockServer) -> HttpCatalogueService {
    HttpCatalogueService::new(
        HttpCatalogueServiceOptions::new()
            .with_base_url(format!("{}/", server.base_url()))
            .with_header("X-Api-Key", "secret"),
    )
    .expect("default transport should build")
}

fn item(id: &str, name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "category": "Electronics",
        "totalQuantity": 50,
        "reservedQuantity": 5,
        "rating": 4.0,
        "createdAt": "2024-05-01T08:00:00Z",
        "updatedAt": "2024-05-01T08:00:00Z"
    })
}

#[tokio::test]
async fn test_list_bare_array_over_http() {
    ensure_init();
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/catalogue-items")
                .header("accept", "application/json")
                .header("x-api-key", "secret");
            then.status(200)
                .json_body(json!([item("srv-1", "Laptop"), item("srv-2", "Monitor")]));
        })
        .await;

    let output = http_service(&server).list_catalogue_items().await.unwrap();

    mock.assert_async().await;
    assert_eq!(output.total_count, 2);
    assert_eq!(output.catalogue_items[0].id, "srv-1");
    assert_eq!(output.catalogue_items[1].name, "Monitor");
    assert_eq!(output.catalogue_items[0].reserved_quantity, Some(5));
}

#[tokio::test]
async fn test_list_errors_envelope_over_http() {
    ensure_init();
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/catalogue-items");
            then.status(200).json_body(json!({"errors": ["boom"]}));
        })
        .await;

    let err = http_service(&server).list_catalogue_items().await.unwrap_err();

    assert_eq!(err.to_string(), "boom");
}

#[tokio::test]
async fn test_add_posts_json_body() {
    ensure_init();
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/catalogue-items")
                .header("content-type", "application/json")
                .json_body(json!({"name": "Lamp", "category": "Lighting", "totalQuantity": 4}));
            then.status(201)
                .json_body(json!({"catalogueItem": item("srv-9", "Lamp")}));
        })
        .await;

    let output = http_service(&server)
        .add_catalogue_item(AddCatalogueItemInput {
            name: "Lamp".into(),
            category: "Lighting".into(),
            total_quantity: 4,
            metadata: None,
        })
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(output.catalogue_item.id, "srv-9");
}

#[tokio::test]
async fn test_add_500_with_json_message() {
    ensure_init();
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/catalogue-items");
            then.status(500)
                .header("content-type", "application/json")
                .body(r#"{"message": "db down"}"#);
        })
        .await;

    let uses = CatalogueUses::new(Arc::new(http_service(&server)));
    let result = uses
        .add_catalogue_item(AddCatalogueItemCommand::new("Lamp", "Lighting", 4))
        .await;

    match result {
        AddCatalogueItemResult::Failure { errors } => {
            assert_eq!(errors.len(), 1);
            assert!(errors[0].contains("500"), "{}", errors[0]);
            assert!(errors[0].contains("db down"), "{}", errors[0]);
        }
        other => panic!("Expected failure, got {:?}", other),
    }
}

#[tokio::test]
async fn test_add_404_with_text_body() {
    ensure_init();
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/catalogue-items");
            then.status(404)
                .header("content-type", "text/plain")
                .body("no such route");
        })
        .await;

    let uses = CatalogueUses::new(Arc::new(http_service(&server)));
    let result = uses
        .add_catalogue_item(AddCatalogueItemCommand::new("Lamp", "Lighting", 4))
        .await;

    assert_eq!(
        result,
        AddCatalogueItemResult::Failure {
            errors: vec!["404 Not Found - no such route".to_string()],
        }
    );
}

#[tokio::test]
async fn test_list_invalid_json_is_failure_result() {
    ensure_init();
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/catalogue-items");
            then.status(200).body("not json at all");
        })
        .await;

    let uses = CatalogueUses::new(Arc::new(http_service(&server)));

    assert_eq!(
        uses.list_catalogue_items().await,
        ListCatalogueItemsResult::Failure {
            errors: vec!["Invalid JSON response".to_string()],
        }
    );
}

#[tokio::test]
async fn test_state_over_http_fetch_then_add() {
    ensure_init();
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/catalogue-items");
            then.status(200).json_body(json!({
                "catalogueItems": [item("srv-1", "Laptop")],
                "totalCount": 10
            }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/catalogue-items");
            then.status(200)
                .json_body(json!({"catalogueItem": item("srv-2", "Mouse")}));
        })
        .await;

    let state = CatalogueItemsState::new(CatalogueUses::new(Arc::new(http_service(&server))));
    assert!(state.fetch_catalogue_items().await);
    assert!(state.add_catalogue_item(AddCatalogueItemCommand::new("Mouse", "Accessories", 1)).await);

    let snapshot = state.snapshot().await;
    assert!(snapshot.error.is_none());
    assert_eq!(snapshot.total_count, 11);
    assert_eq!(snapshot.catalogue_items[0].id, "srv-2");
    assert_eq!(snapshot.catalogue_items[1].id, "srv-1");
}
