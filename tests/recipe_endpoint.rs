use std::sync::Arc;

use axum_test::TestServer;
use layer_apps::configure_app;
use serde_json::{json, Value};

mod common;
use common::MockGateway;

fn server_with(mock: Arc<MockGateway>) -> TestServer {
    TestServer::new(configure_app(mock).into_make_service()).unwrap()
}

#[tokio::test]
async fn recipe_returns_recipe_with_metadata() {
    let mock = Arc::new(MockGateway::succeeding(
        "Spinach omelette: whisk eggs...",
        "chef-model",
        0.0015,
    ));
    let server = server_with(mock.clone());

    let response = server
        .post("/recipe")
        .json(&json!({ "groceryList": ["eggs", "spinach"] }))
        .await;

    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["recipe"], "Spinach omelette: whisk eggs...");
    assert_eq!(body["metadata"]["model"], "chef-model");
    assert_eq!(body["metadata"]["cost"], 0.0015);
    assert_eq!(body["metadata"]["ingredients"], json!(["eggs", "spinach"]));
    assert!(body["metadata"]["latency"].as_str().unwrap().ends_with("ms"));
    assert_eq!(mock.call_count(), 1);
}

#[tokio::test]
async fn recipe_rejects_empty_grocery_list() {
    let mock = Arc::new(MockGateway::succeeding("recipe", "chef-model", 0.0015));
    let server = server_with(mock.clone());

    let response = server
        .post("/recipe")
        .json(&json!({ "groceryList": [] }))
        .await;

    assert_eq!(response.status_code(), 400);

    let body: Value = response.json();
    assert_eq!(body["error"], "Invalid request");
    assert_eq!(
        body["message"],
        "groceryList must be a non-empty array of strings"
    );
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn recipe_rejects_missing_grocery_list() {
    let mock = Arc::new(MockGateway::succeeding("recipe", "chef-model", 0.0015));
    let server = server_with(mock.clone());

    let response = server.post("/recipe").json(&json!({})).await;

    assert_eq!(response.status_code(), 400);
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn recipe_rejects_non_string_items() {
    let mock = Arc::new(MockGateway::succeeding("recipe", "chef-model", 0.0015));
    let server = server_with(mock.clone());

    let response = server
        .post("/recipe")
        .json(&json!({ "groceryList": [1, 2, 3] }))
        .await;

    assert_eq!(response.status_code(), 400);
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn recipe_maps_upstream_failure_to_500() {
    let mock = Arc::new(MockGateway::failing("model pool exhausted"));
    let server = server_with(mock.clone());

    let response = server
        .post("/recipe")
        .json(&json!({ "groceryList": ["eggs"] }))
        .await;

    assert_eq!(response.status_code(), 500);

    let body: Value = response.json();
    assert_eq!(body["error"], "Recipe generation failed");
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("model pool exhausted"));
}
