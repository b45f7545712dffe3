//! Tests for the HTTP API.
//!
//! Requests are driven through the router with `tower::ServiceExt::oneshot`,
//! so no socket is bound.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use domain_security_checker::server::{router, ApiState};
use domain_security_checker::{Evaluator, StaticDnsClient};

#[path = "helpers.rs"]
mod helpers;

use helpers::{create_test_evaluator, create_test_zone};

async fn get(evaluator: &Evaluator, uri: &str) -> (StatusCode, Value) {
    let app = router(ApiState::new(evaluator.clone()));
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .expect("request completes");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body is readable")
        .to_bytes();
    let body = serde_json::from_slice(&bytes).expect("body is JSON");
    (status, body)
}

#[tokio::test]
async fn test_check_returns_record_json() {
    let evaluator = create_test_evaluator(&create_test_zone()).await;

    let (status, body) = get(&evaluator, "/check/good.example").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["domain"], "good.example");
    assert_eq!(body["hasMX"], true);
    assert_eq!(body["hasSPF"], true);
    assert_eq!(body["spfRecord"], "v=spf1 include:_spf.good.example ~all");
    assert_eq!(body["hasDMARC"], true);
    assert_eq!(body["dmarcRecord"], "v=DMARC1; p=reject");
    assert!(body["id"].as_i64().expect("id is numeric") > 0);
    assert!(body["checkedAt"].is_string());
}

#[tokio::test]
async fn test_check_unknown_domain_is_all_false() {
    let evaluator = create_test_evaluator(&StaticDnsClient::new()).await;

    let (status, body) = get(&evaluator, "/check/nothing.example").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["hasMX"], false);
    assert_eq!(body["hasSPF"], false);
    assert_eq!(body["spfRecord"], "");
    assert_eq!(body["hasDMARC"], false);
    assert_eq!(body["dmarcRecord"], "");
}

#[tokio::test]
async fn test_check_missing_domain_is_bad_request() {
    let evaluator = create_test_evaluator(&create_test_zone()).await;

    let (status, body) = get(&evaluator, "/check/").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Domain required");
}

#[tokio::test]
async fn test_check_blank_domain_is_bad_request() {
    let client = create_test_zone();
    let evaluator = create_test_evaluator(&client).await;

    let (status, body) = get(&evaluator, "/check/%20%20").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"]
        .as_str()
        .expect("error is a string")
        .contains("Invalid domain"));
    assert_eq!(client.query_count(), 0);
}

#[tokio::test]
async fn test_history_missing_domain_is_bad_request() {
    let evaluator = create_test_evaluator(&create_test_zone()).await;

    let (status, body) = get(&evaluator, "/history/").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Domain required");
}

#[tokio::test]
async fn test_history_is_newest_first_and_limited() {
    let evaluator = create_test_evaluator(&create_test_zone()).await;
    for _ in 0..3 {
        let (status, _) = get(&evaluator, "/check/good.example").await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body) = get(&evaluator, "/history/good.example?limit=2").await;
    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().expect("history is an array");
    assert_eq!(rows.len(), 2);
    let first = rows[0]["id"].as_i64().expect("id");
    let second = rows[1]["id"].as_i64().expect("id");
    assert!(first > second, "newest first: {first} then {second}");
}

#[tokio::test]
async fn test_history_invalid_limit_uses_default() {
    let evaluator = create_test_evaluator(&create_test_zone()).await;
    for _ in 0..12 {
        evaluator.evaluate("good.example").await.expect("evaluates");
    }

    for uri in [
        "/history/good.example",
        "/history/good.example?limit=abc",
        "/history/good.example?limit=0",
        "/history/good.example?limit=-3",
    ] {
        let (status, body) = get(&evaluator, uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(body.as_array().expect("array").len(), 10, "{uri}");
    }
}

#[tokio::test]
async fn test_history_unknown_domain_is_empty_array() {
    let evaluator = create_test_evaluator(&create_test_zone()).await;
    evaluator.evaluate("good.example").await.expect("evaluates");

    let (status, body) = get(&evaluator, "/history/other.example").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::Array(Vec::new()));
}

#[tokio::test]
async fn test_history_after_close_is_server_error() {
    let evaluator = create_test_evaluator(&create_test_zone()).await;
    evaluator.close().await;

    let (status, body) = get(&evaluator, "/history/good.example").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].is_string());
}
