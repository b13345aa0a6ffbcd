//! Integration tests for the resource façade.
//!
//! These tests verify the name-to-path translation, nested resource
//! composition, and that each verb issues the expected HTTP call.

use std::collections::HashMap;

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use shoper_api::{ApiUrl, ShoperClient, ShoperConfig};

/// Creates a client pointed at the mock server under a realistic base path.
fn create_client(server: &MockServer, access_token: &str) -> ShoperClient {
    let config = ShoperConfig::builder()
        .api_url(ApiUrl::new(format!("{}/webapi/rest", server.uri())).unwrap())
        .access_token(access_token)
        .build()
        .unwrap();
    ShoperClient::new(&config)
}

// ============================================================================
// Name-to-path translation
// ============================================================================

#[test]
fn test_resource_names_translate_underscores_to_hyphens() {
    let config = ShoperConfig::builder()
        .api_url(ApiUrl::new("https://shop.example/webapi/rest").unwrap())
        .build()
        .unwrap();
    let client = ShoperClient::new(&config);

    assert_eq!(client.resource("order_status").path(), "order-status");
    assert_eq!(client.resource("product_stocks").path(), "product-stocks");
    assert_eq!(client.resource("products").path(), "products");
    assert_eq!(
        client.resource("products").child("main_image").path(),
        "products/main-image"
    );
}

// ============================================================================
// Verb operations
// ============================================================================

#[tokio::test]
async fn test_list_issues_get_on_collection_with_bearer_authorization() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/webapi/rest/products"))
        .and(header("Authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"count": "0", "list": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server, "test-token");
    let body = client.resource("products").list(None).await.unwrap();

    assert_eq!(body["count"], "0");
}

#[tokio::test]
async fn test_list_forwards_query_parameters() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/webapi/rest/products"))
        .and(query_param("limit", "50"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"list": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server, "test-token");
    let mut query = HashMap::new();
    query.insert("limit".to_string(), "50".to_string());
    query.insert("page".to_string(), "2".to_string());

    client
        .resource("products")
        .list(Some(query))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_get_issues_get_on_item_path() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/webapi/rest/order-status/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status_id": "7"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server, "test-token");
    let body = client
        .resource("order_status")
        .get(7, None)
        .await
        .unwrap();

    assert_eq!(body["status_id"], "7");
}

#[tokio::test]
async fn test_create_issues_post_with_json_body() {
    let server = MockServer::start().await;

    let payload = json!({"translations": {"pl_PL": {"name": "Widget"}}});
    Mock::given(method("POST"))
        .and(path("/webapi/rest/products"))
        .and(body_json(payload.clone()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(101)))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server, "test-token");
    let body = client
        .resource("products")
        .create(payload, None)
        .await
        .unwrap();

    assert_eq!(body, json!(101));
}

#[tokio::test]
async fn test_update_issues_put_on_item_path() {
    let server = MockServer::start().await;

    let payload = json!({"stock": {"price": "19.99"}});
    Mock::given(method("PUT"))
        .and(path("/webapi/rest/products/101"))
        .and(body_json(payload.clone()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(true)))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server, "test-token");
    let body = client
        .resource("products")
        .update(101, payload, None)
        .await
        .unwrap();

    assert_eq!(body, json!(true));
}

#[tokio::test]
async fn test_delete_issues_delete_on_item_path() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/webapi/rest/products/101"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(true)))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server, "test-token");
    let body = client
        .resource("products")
        .delete(101, None)
        .await
        .unwrap();

    assert_eq!(body, json!(true));
}

// ============================================================================
// Nested resources
// ============================================================================

#[tokio::test]
async fn test_nested_resource_composes_path() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/webapi/rest/products/images/19"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"gfx_id": "19"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server, "test-token");
    let body = client
        .resource("products")
        .child("images")
        .get(19, None)
        .await
        .unwrap();

    assert_eq!(body["gfx_id"], "19");
}

// ============================================================================
// Structural, not semantic, mapping
// ============================================================================

#[tokio::test]
async fn test_unknown_resource_surfaces_as_remote_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/webapi/rest/no-such-thing"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"error": "resource_not_found"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server, "test-token");
    let result = client.resource("no_such_thing").list(None).await;

    match result {
        Err(shoper_api::ApiError::Response(e)) => {
            assert_eq!(e.code, 404);
            assert_eq!(e.body, json!({"error": "resource_not_found"}));
        }
        other => panic!("Expected ApiError::Response, got {other:?}"),
    }
}
