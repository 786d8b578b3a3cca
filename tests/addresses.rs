//! Integration tests for the address verification API, backed by a local
//! mock server.

use httpmock::prelude::*;
use plivo::{
    Config, PlivoClient, PlivoError,
    address::{AddressProofType, CreateAddressParams, ListAddressesParams, Salutation, UpdateAddressParams},
    upload::UploadFile,
};
use serde_json::json;
use url::Url;

/// `Basic base64("MA123:token")`.
const AUTH_HEADER: &str = "Basic TUExMjM6dG9rZW4=";

fn client_for(server: &MockServer) -> PlivoClient {
    let config = Config::new("MA123", "token")
        .unwrap()
        .with_api_url(Url::parse(&server.base_url()).unwrap());
    PlivoClient::with_config(config)
}

fn address_json(id: &str) -> serde_json::Value {
    json!({
        "id": id,
        "account": "MA123",
        "salutation": "Ms",
        "first_name": "Jane",
        "last_name": "Doe",
        "country_iso": "FR",
        "address_line1": "12",
        "address_line2": "Rue de la Paix",
        "city": "Paris",
        "region": "Ile-de-France",
        "postal_code": "75002",
        "validation_status": "pending",
        "verification_status": null,
        "url": format!("/v1/Account/MA123/Verification/Address/{id}/")
    })
}

fn create_params() -> CreateAddressParams {
    CreateAddressParams::new(
        "FR",
        Salutation::Ms,
        "Jane",
        "Doe",
        "12",
        "Rue de la Paix",
        "Paris",
        "Ile-de-France",
        "75002",
        AddressProofType::Passport,
    )
}

#[tokio::test]
async fn gets_an_address() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v1/Account/MA123/Verification/Address/24856289978366/")
            .header("authorization", AUTH_HEADER);
        then.status(200).json_body(address_json("24856289978366"));
    });

    let client = client_for(&server);
    let address = client.addresses().get("24856289978366").await.unwrap();

    mock.assert();
    assert_eq!(address.id, "24856289978366");
    assert_eq!(address.country_iso, "FR");
    assert!(address.verification_status.is_none());
}

#[tokio::test]
async fn rejects_empty_address_id() {
    let server = MockServer::start();
    let client = client_for(&server);

    assert!(matches!(
        client.addresses().get("").await,
        Err(PlivoError::InvalidRequest(_))
    ));
    assert!(matches!(
        client.addresses().delete(" ").await,
        Err(PlivoError::InvalidRequest(_))
    ));
}

#[tokio::test]
async fn lists_addresses_with_filters() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v1/Account/MA123/Verification/Address/")
            .query_param("country_iso", "FR")
            .query_param("verification_status", "pending")
            .query_param("limit", "10")
            .query_param("offset", "0");
        then.status(200).json_body(json!({
            "api_id": "aa-bb",
            "meta": { "limit": 10, "offset": 0, "total_count": 2, "next": null, "previous": null },
            "objects": [address_json("1"), address_json("2")]
        }));
    });

    let client = client_for(&server);
    let params = ListAddressesParams {
        country_iso: Some("FR".into()),
        verification_status: Some(plivo::address::DocumentStatus::Pending),
        limit: Some(10),
        offset: Some(0),
        ..Default::default()
    };
    let page = client.addresses().list(&params).await.unwrap();

    mock.assert();
    assert_eq!(page.meta.total_count, Some(2));
    assert_eq!(page.objects.len(), 2);
    assert_eq!(page.objects[1].id, "2");
}

#[tokio::test]
async fn list_rejects_out_of_range_limit() {
    let server = MockServer::start();
    let client = client_for(&server);

    for limit in [0, 21] {
        let params = ListAddressesParams { limit: Some(limit), ..Default::default() };
        assert!(matches!(
            client.addresses().list(&params).await,
            Err(PlivoError::InvalidRequest(_))
        ));
    }
}

#[tokio::test]
async fn list_all_walks_pages() {
    let server = MockServer::start();
    let first_page = server.mock(|when, then| {
        when.method(GET)
            .path("/v1/Account/MA123/Verification/Address/")
            .query_param("offset", "0");
        then.status(200).json_body(json!({
            "meta": { "limit": 20, "offset": 0, "total_count": 23 },
            "objects": (0..20).map(|i| address_json(&i.to_string())).collect::<Vec<_>>()
        }));
    });
    let second_page = server.mock(|when, then| {
        when.method(GET)
            .path("/v1/Account/MA123/Verification/Address/")
            .query_param("offset", "20");
        then.status(200).json_body(json!({
            "meta": { "limit": 20, "offset": 20, "total_count": 23 },
            "objects": (20..23).map(|i| address_json(&i.to_string())).collect::<Vec<_>>()
        }));
    });

    let client = client_for(&server);
    let addresses = client.addresses().list_all().await.unwrap();

    first_page.assert();
    second_page.assert();
    assert_eq!(addresses.len(), 23);
    assert_eq!(addresses[22].id, "22");
}

#[tokio::test]
async fn creates_an_address() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/v1/Account/MA123/Verification/Address/")
            .header("authorization", AUTH_HEADER)
            .body_contains("name=\"country_iso\"")
            .body_contains("FR")
            .body_contains("name=\"address_proof_type\"")
            .body_contains("passport");
        then.status(201).json_body(json!({
            "api_id": "aa-bb",
            "message": "Your request has been accepted.",
            "id": "24856289978366"
        }));
    });

    let client = client_for(&server);
    let response = client.addresses().create(create_params()).await.unwrap();

    mock.assert();
    assert_eq!(response.id.as_deref(), Some("24856289978366"));
}

#[tokio::test]
async fn creates_an_address_with_document_proof() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("proof.png");
    tokio::fs::write(&path, b"png bytes").await.unwrap();

    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/v1/Account/MA123/Verification/Address/")
            .body_contains("filename=\"proof.png\"")
            .body_contains("image/png");
        then.status(201).json_body(json!({
            "api_id": "aa-bb",
            "message": "Your request has been accepted.",
            "id": "1"
        }));
    });

    let client = client_for(&server);
    let mut params = create_params();
    params.file = Some(UploadFile::new(&path));
    client.addresses().create(params).await.unwrap();

    mock.assert();
}

#[tokio::test]
async fn create_validation_failures_do_not_hit_the_server() {
    let server = MockServer::start();
    let client = client_for(&server);

    // Spain without a fiscal identification code.
    let mut params = create_params();
    params.country_iso = "ES".into();
    assert!(matches!(
        client.addresses().create(params).await,
        Err(PlivoError::InvalidRequest(_))
    ));

    // Unsupported upload extension.
    let mut params = create_params();
    params.file = Some(UploadFile::new("proof.gif"));
    assert!(matches!(
        client.addresses().create(params).await,
        Err(PlivoError::UnsupportedFileType { .. })
    ));
}

#[tokio::test]
async fn updates_an_address() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/v1/Account/MA123/Verification/Address/24856289978366/")
            .body_contains("name=\"alias\"")
            .body_contains("home office");
        then.status(202).json_body(json!({
            "api_id": "aa-bb",
            "message": "changed"
        }));
    });

    let client = client_for(&server);
    let params = UpdateAddressParams { alias: Some("home office".into()), ..Default::default() };
    let response = client.addresses().update("24856289978366", params).await.unwrap();

    mock.assert();
    assert_eq!(response.message, "changed");
}

#[tokio::test]
async fn deletes_an_address() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(DELETE)
            .path("/v1/Account/MA123/Verification/Address/24856289978366/")
            .header("authorization", AUTH_HEADER);
        then.status(204);
    });

    let client = client_for(&server);
    client.addresses().delete("24856289978366").await.unwrap();

    mock.assert();
}

#[tokio::test]
async fn decodes_api_errors() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/v1/Account/MA123/Verification/Address/missing/");
        then.status(404).json_body(json!({
            "api_id": "aa-bb",
            "error": "not found"
        }));
    });

    let client = client_for(&server);
    match client.addresses().get("missing").await {
        Err(PlivoError::Api { status, message, api_id }) => {
            assert_eq!(status, 404);
            assert_eq!(message, "not found");
            assert_eq!(api_id.as_deref(), Some("aa-bb"));
        }
        other => panic!("unexpected result: {other:?}"),
    }
}
