//! Integration tests for the token relay and embed config endpoints
mod common;

use crate::common::{anonymous_get, authenticated_get, create_test_app_state};

use axum::http::StatusCode;
use http_body_util::BodyExt;
use tower::ServiceExt;

use hb_server::build_router;

#[tokio::test]
async fn test_token_relay_requires_identity_header() {
    let app = build_router(create_test_app_state());

    let response = app
        .oneshot(anonymous_get("/api/dashboard/token"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    // Unauthenticated, not TokenUnavailable: the identity is what is missing
    assert_eq!(json["error"], "Authentication required");
}

#[tokio::test]
async fn test_token_relay_without_token_returns_exact_error_body() {
    let app = build_router(create_test_app_state());

    let response = app
        .oneshot(authenticated_get("/api/dashboard/token", "u1", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"], "No access token available");
    assert_eq!(
        json["message"],
        "The x-forwarded-access-token header is not present in the request"
    );
    assert_eq!(json.as_object().unwrap().len(), 2);
}

#[tokio::test]
async fn test_token_relay_round_trips_header_value() {
    let app = build_router(create_test_app_state());
    let token = "eyJr.fake-looking.bearer_token-1234567890";

    let response = app
        .oneshot(authenticated_get("/api/dashboard/token", "u1", Some(token)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    // Relayed value equals the inbound header byte-for-byte
    assert_eq!(json["token"], token);
}

#[tokio::test]
async fn test_token_relay_rejects_unreadable_token_header() {
    let app = build_router(create_test_app_state());

    let mut request = anonymous_get("/api/dashboard/token");
    request
        .headers_mut()
        .insert("x-forwarded-user", "u1".parse().unwrap());
    request.headers_mut().insert(
        "x-forwarded-access-token",
        axum::http::HeaderValue::from_bytes(b"t\xC3\xB6ken").unwrap(),
    );

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    // Not "No access token available": a token WAS sent, just unusable
    assert_eq!(json["error"], "Authentication required");
    assert!(
        json["message"]
            .as_str()
            .unwrap()
            .contains("x-forwarded-access-token")
    );
}

#[tokio::test]
async fn test_dashboard_config_returns_derived_urls() {
    let app = build_router(create_test_app_state());

    let response = app
        .oneshot(authenticated_get("/api/dashboard/config", "u1", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["workspaceId"], "1444828305810485");
    assert_eq!(
        json["embedUrl"],
        "https://acme.cloud.example.com/embed/dashboardsv3/01f0fd70293d1fb2b56879b9058116b3?o=1444828305810485"
    );
    assert_eq!(
        json["viewUrl"],
        "https://acme.cloud.example.com/dashboards/01f0fd70293d1fb2b56879b9058116b3?o=1444828305810485"
    );
}

#[tokio::test]
async fn test_dashboard_config_requires_identity() {
    let app = build_router(create_test_app_state());

    let response = app
        .oneshot(anonymous_get("/api/dashboard/config"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
