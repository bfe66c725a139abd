//! Integration tests for the app management endpoints using wiremock.

use airwatch_api::apps::{AppSearchOptions, BeginInstall};
use airwatch_api::client::AirWatchClient;
use airwatch_api::config::ClientConfig;
use reqwest::StatusCode;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Helper: creates an AirWatchClient pointed at the given wiremock server.
fn mock_client(server: &MockServer) -> AirWatchClient {
    let config = ClientConfig::builder("example.awmdm.com", "T123")
        .authorization("Basic YWRtaW46c2VjcmV0")
        .build()
        .unwrap();
    AirWatchClient::with_base_url(config, &format!("{}/api/", server.uri())).unwrap()
}

// ── apps_search ────────────────────────────────────────────────────────

#[tokio::test]
async fn apps_search_sends_only_supplied_filters() {
    let server = MockServer::start().await;
    let client = mock_client(&server);

    Mock::given(method("GET"))
        .and(path("/api/mam/apps/search"))
        .and(query_param("bundleid", "com.example.field"))
        .and(query_param("applicationtype", "internal"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "Application": [{"Id": {"Value": 77}, "BundleId": "com.example.field"}],
            "Total": 1
        })))
        .expect(1)
        .mount(&server)
        .await;

    let options = AppSearchOptions {
        bundle_id: Some("com.example.field".to_string()),
        application_type: Some("internal".to_string()),
        ..Default::default()
    };
    let resp = client.apps_search(&options).await.unwrap();
    assert_eq!(resp.parsed().unwrap()["Total"], 1);

    let requests = server.received_requests().await.unwrap();
    let keys: Vec<String> = requests[0].url.query_pairs().map(|(k, _)| k.into_owned()).collect();
    assert_eq!(keys, vec!["bundleid", "applicationtype"], "type must be omitted");
}

#[tokio::test]
async fn apps_search_without_filters_has_no_query() {
    let server = MockServer::start().await;
    let client = mock_client(&server);

    Mock::given(method("GET"))
        .and(path("/api/mam/apps/search"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let resp = client.apps_search(&AppSearchOptions::default()).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert!(resp.parsed().is_none());

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].url.query().is_none());
}

// ── app_devices / install_internal_app ─────────────────────────────────

#[tokio::test]
async fn app_devices_lists_device_ids() {
    let server = MockServer::start().await;
    let client = mock_client(&server);

    Mock::given(method("GET"))
        .and(path("/api/mam/apps/internal/77/devices"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "DeviceId": [101, 102, 103]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let resp = client.app_devices(77).await.unwrap();
    assert_eq!(resp.parsed().unwrap()["DeviceId"], serde_json::json!([101, 102, 103]));
}

#[tokio::test]
async fn install_internal_app_posts_device_id() {
    let server = MockServer::start().await;
    let client = mock_client(&server);

    Mock::given(method("POST"))
        .and(path("/api/mam/apps/internal/77/install"))
        .and(header("content-type", "application/json"))
        .and(header("aw-tenant-code", "T123"))
        .and(body_json(serde_json::json!({"deviceid": 101})))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&server)
        .await;

    let resp = client.install_internal_app(77, 101).await.unwrap();
    assert_eq!(resp.status(), StatusCode::ACCEPTED);
}

// ── begin_install ──────────────────────────────────────────────────────

#[tokio::test]
async fn begin_install_sends_apple_model_catalog() {
    let server = MockServer::start().await;
    let client = mock_client(&server);

    Mock::given(method("POST"))
        .and(path("/api/mam/apps/internal/begininstall"))
        .and(body_json(serde_json::json!({
            "BlobId": 900,
            "DeviceType": "Apple",
            "ApplicationName": "Field Tool",
            "PushMode": "Auto",
            "LocationGroupId": 570,
            "SupportedModels": {
                "Model": [
                    {"ModelId": 1, "ModelName": "iPhone"},
                    {"ModelId": 2, "ModelName": "iPad"},
                    {"ModelId": 3, "ModelName": "iPod Touch"}
                ]
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "Id": {"Value": 1234},
            "ApplicationName": "Field Tool"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let resp = client
        .begin_install(&BeginInstall::new(900, "Field Tool", 570))
        .await
        .unwrap();
    assert_eq!(resp.parsed().unwrap()["Id"]["Value"], 1234);
}

// ── smart group assignment ─────────────────────────────────────────────

#[tokio::test]
async fn add_smart_group_assignment_posts_without_body() {
    let server = MockServer::start().await;
    let client = mock_client(&server);

    Mock::given(method("POST"))
        .and(path("/api/mam/apps/internal/77/smartgroups/15"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let resp = client.add_smart_group_assignment_to_app(77, 15).await.unwrap();
    assert!(resp.is_success());

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].body.is_empty());
}

#[tokio::test]
async fn remove_smart_group_assignment_issues_delete() {
    let server = MockServer::start().await;
    let client = mock_client(&server);

    Mock::given(method("DELETE"))
        .and(path("/api/mam/apps/internal/77/smartgroups/15"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let resp = client.remove_smart_group_assignment_from_app(77, 15).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn remove_missing_assignment_returns_error_status() {
    let server = MockServer::start().await;
    let client = mock_client(&server);

    Mock::given(method("DELETE"))
        .and(path("/api/mam/apps/internal/77/smartgroups/16"))
        .respond_with(ResponseTemplate::new(400).set_body_string("Assignment does not exist"))
        .mount(&server)
        .await;

    let resp = client.remove_smart_group_assignment_from_app(77, 16).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let err = resp.error_for_status().unwrap_err();
    assert!(err.to_string().contains("Assignment does not exist"));
}
