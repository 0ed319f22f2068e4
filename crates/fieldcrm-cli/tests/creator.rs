//! HTTP creator tests against a mock CRM API.

use std::time::Duration;

use httpmock::prelude::*;
use serde_json::json;
use url::Url;

use fieldcrm_cli::creator::{ApiObjectCreator, DEFAULT_TIMEOUT};
use fieldcrm_ingest::{CreateError, ImportOptions, ObjectCreator, import_objects};
use fieldcrm_model::{DictionaryKind, LabelCatalog, ObjectCreatePayload};

fn payload(address: &str) -> ObjectCreatePayload {
    ObjectCreatePayload {
        object_type: "MKD".to_string(),
        address: address.to_string(),
        city_id: "c1".to_string(),
        status: "NEW".to_string(),
        district_id: None,
        contact_name: None,
        contact_phone: None,
    }
}

fn creator_for(server: &MockServer, token: Option<&str>) -> ApiObjectCreator {
    let base = Url::parse(&server.base_url()).expect("mock base url");
    ApiObjectCreator::new(&base, token.map(str::to_string), DEFAULT_TIMEOUT).expect("creator")
}

#[tokio::test]
async fn test_created_object_is_ok() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/v1/objects/")
                .header("authorization", "Bearer t0ken")
                .json_body(json!({
                    "type": "MKD",
                    "address": "Lenina 1",
                    "city_id": "c1",
                    "status": "NEW"
                }));
            then.status(201).json_body(json!({"id": "o-1"}));
        })
        .await;

    let mut creator = creator_for(&server, Some("t0ken"));
    let result = creator.create_object(&payload("Lenina 1")).await;

    assert_eq!(result, Ok(()));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_validation_error_is_rejected() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/v1/objects/");
            then.status(422)
                .json_body(json!({"detail": "city not found"}));
        })
        .await;

    let mut creator = creator_for(&server, None);
    let result = creator.create_object(&payload("Lenina 1")).await;

    assert_eq!(
        result,
        Err(CreateError::Rejected {
            status: 422,
            message: "city not found".to_string(),
        })
    );
}

#[tokio::test]
async fn test_unreachable_api_is_transport_error() {
    let base = Url::parse("http://127.0.0.1:9").expect("url");
    let mut creator = ApiObjectCreator::new(&base, None, DEFAULT_TIMEOUT).expect("creator");

    let result = creator.create_object(&payload("Lenina 1")).await;

    assert!(matches!(result, Err(CreateError::Transport(_))));
}

#[tokio::test]
async fn test_stalled_api_times_out_as_transport_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/v1/objects/");
            then.status(201).delay(Duration::from_secs(2));
        })
        .await;
    let base = Url::parse(&server.base_url()).expect("mock base url");
    let mut creator =
        ApiObjectCreator::new(&base, None, Duration::from_millis(200)).expect("creator");

    let result = creator.create_object(&payload("Lenina 1")).await;

    assert!(matches!(result, Err(CreateError::Transport(_))), "{result:?}");
}

#[tokio::test]
async fn test_import_counts_api_rejections() {
    let server = MockServer::start_async().await;
    let created = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/v1/objects/")
                .body_includes("Good 1");
            then.status(201);
        })
        .await;
    let rejected = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/v1/objects/")
                .body_includes("Bad 2");
            then.status(400).body("bad request");
        })
        .await;

    let catalog = LabelCatalog::standard();
    let types = catalog.reverse_map(DictionaryKind::ObjectType);
    let statuses = catalog.reverse_map(DictionaryKind::ObjectStatus);
    let options = ImportOptions::new(&types, &statuses);
    let mut creator = creator_for(&server, None);

    let text = "Тип;Адрес;Город_ID\nМКД;Good 1;c1\nМКД;Bad 2;c1\nМКД;;c1";
    let summary = import_objects(text, &options, &mut creator).await;

    assert_eq!((summary.created, summary.skipped), (1, 2));
    assert_eq!(summary.failures[0].line, 3);
    assert_eq!(summary.failures[0].reason.to_string(), "rejected with status 400: bad request");
    created.assert_async().await;
    rejected.assert_async().await;
}
