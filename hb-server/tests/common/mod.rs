#![allow(dead_code)]

//! Test infrastructure for hb-server API tests

use hb_auth::HeaderContract;
use hb_config::DashboardConfig;
use hb_server::AppState;

use axum::body::Body;
use axum::http::Request;

/// Create AppState for testing with the default header contract
pub fn create_test_app_state() -> AppState {
    AppState {
        contract: HeaderContract::default(),
        dashboard: DashboardConfig {
            instance_url: String::from("https://acme.cloud.example.com"),
            workspace_id: String::from("1444828305810485"),
            dashboard_id: String::from("01f0fd70293d1fb2b56879b9058116b3"),
        },
    }
}

/// GET request with no proxy headers
pub fn anonymous_get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// GET request with the identity header, optionally the token header
pub fn authenticated_get(uri: &str, user: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("GET")
        .uri(uri)
        .header("x-forwarded-user", user)
        .header("x-forwarded-preferred-username", "alice");

    if let Some(token) = token {
        builder = builder.header("x-forwarded-access-token", token);
    }

    builder.body(Body::empty()).unwrap()
}
