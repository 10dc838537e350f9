//! Integration tests for the seller registration flow.

use axum::http::StatusCode;
use httpmock::prelude::*;
use serde_json::json;

use mercantia_integration_tests::{post_json, storefront_app};

#[tokio::test]
async fn test_register_seller_returns_created_with_channel_triple() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/")
            .json_body_includes(
                r#"{"operationName": "RegisterNewSeller", "variables": {"input": {"shopName": "Millity Tattoo", "cnpj": "12.345.678/0001-95"}}}"#,
            );
        then.status(200).json_body(json!({
            "data": {
                "registerNewSeller": {
                    "id": "S99",
                    "code": "millity-tattoo",
                    "token": "millity-tattoo"
                }
            }
        }));
    });

    let app = storefront_app(&server.base_url());
    let (status, body) = post_json(
        &app,
        "/sellers/register",
        &json!({
            "shopName": "Millity Tattoo",
            "emailAddress": "contact@millity.example",
            "cnpj": "12.345.678/0001-95",
            "companyName": "Millity Ltda",
            "tradingName": "Millity"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], "S99");
    assert_eq!(body["code"], "millity-tattoo");
    assert_eq!(body["token"], "millity-tattoo");
    mock.assert();
}

#[tokio::test]
async fn test_register_seller_missing_field_is_422_without_network() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(POST).path("/");
        then.status(200).json_body(json!({"data": null}));
    });

    let app = storefront_app(&server.base_url());
    let (status, body) = post_json(
        &app,
        "/sellers/register",
        &json!({
            "shopName": "Millity Tattoo",
            "emailAddress": "contact@millity.example",
            "cnpj": "",
            "companyName": "Millity Ltda"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "validation");
    assert_eq!(body["fields"][0]["field"], "cnpj");
    // Rejected before the mutation is sent
    assert_eq!(mock.calls(), 0);
}

#[tokio::test]
async fn test_register_seller_omitted_key_is_validation_shape() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(POST).path("/");
        then.status(200).json_body(json!({"data": null}));
    });

    let app = storefront_app(&server.base_url());
    // "cnpj" absent entirely, not sent as ""
    let (status, body) = post_json(
        &app,
        "/sellers/register",
        &json!({
            "shopName": "Millity Tattoo",
            "emailAddress": "contact@millity.example",
            "companyName": "Millity Ltda"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "validation");
    assert_eq!(body["fields"][0]["field"], "cnpj");
    assert_eq!(mock.calls(), 0);
}

#[tokio::test]
async fn test_register_seller_lists_every_missing_field() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(POST).path("/");
        then.status(200).json_body(json!({"data": null}));
    });

    let app = storefront_app(&server.base_url());
    let (status, body) = post_json(
        &app,
        "/sellers/register",
        &json!({
            "shopName": "",
            "emailAddress": "",
            "cnpj": "",
            "companyName": ""
        }),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let fields: Vec<&str> = body["fields"]
        .as_array()
        .expect("fields array")
        .iter()
        .map(|f| f["field"].as_str().expect("field name"))
        .collect();
    assert_eq!(fields, vec!["shopName", "emailAddress", "cnpj", "companyName"]);
}

#[tokio::test]
async fn test_register_seller_duplicate_cnpj_is_422() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(POST)
            .path("/")
            .json_body_includes(r#"{"operationName": "RegisterNewSeller"}"#);
        then.status(200).json_body(json!({
            "data": null,
            "errors": [{
                "message": "cnpj already in use",
                "extensions": {"code": "USER_INPUT_ERROR", "field": "cnpj"}
            }]
        }));
    });

    let app = storefront_app(&server.base_url());
    let (status, body) = post_json(
        &app,
        "/sellers/register",
        &json!({
            "shopName": "Millity Tattoo",
            "emailAddress": "contact@millity.example",
            "cnpj": "12.345.678/0001-95",
            "companyName": "Millity Ltda"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "validation");
    assert_eq!(body["fields"][0]["field"], "cnpj");
    assert_eq!(body["fields"][0]["message"], "cnpj already in use");
}

#[tokio::test]
async fn test_register_seller_backend_outage_is_502() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(POST).path("/");
        then.status(503).body("unavailable");
    });

    let app = storefront_app(&server.base_url());
    let (status, body) = post_json(
        &app,
        "/sellers/register",
        &json!({
            "shopName": "Millity Tattoo",
            "emailAddress": "contact@millity.example",
            "cnpj": "12.345.678/0001-95",
            "companyName": "Millity Ltda"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error"], "upstream");
}
