use crate::{ApiError, AppState, CurrentIdentity};

use axum::{body::Body, extract::FromRequestParts, http::Request};
use hb_auth::{HeaderContract, Identity};
use hb_config::DashboardConfig;

fn test_state() -> AppState {
    AppState {
        contract: HeaderContract::default(),
        dashboard: DashboardConfig {
            instance_url: String::from("https://acme.cloud.example.com"),
            workspace_id: String::from("123"),
            dashboard_id: String::from("abc"),
        },
    }
}

fn identity(token: Option<&str>) -> Identity {
    Identity {
        user_id: String::from("u1"),
        preferred_username: Some(String::from("alice")),
        email: None,
        access_token: token.map(String::from),
    }
}

#[tokio::test]
async fn given_identity_in_extensions_when_extracted_then_succeeds() {
    let state = test_state();
    let mut request = Request::builder().body(Body::empty()).unwrap();
    request.extensions_mut().insert(identity(Some("tok")));
    let (mut parts, _body) = request.into_parts();

    let result = CurrentIdentity::from_request_parts(&mut parts, &state).await;

    let CurrentIdentity(extracted) = result.unwrap();
    assert_eq!(extracted.user_id, "u1");
    assert_eq!(extracted.access_token.as_deref(), Some("tok"));
}

#[tokio::test]
async fn given_no_identity_in_extensions_when_extracted_then_unauthenticated() {
    let state = test_state();
    let request = Request::builder().body(Body::empty()).unwrap();
    let (mut parts, _body) = request.into_parts();

    let result = CurrentIdentity::from_request_parts(&mut parts, &state).await;

    let err = result.unwrap_err();
    assert!(matches!(err, ApiError::Unauthenticated { .. }));
    assert!(err.to_string().contains("x-forwarded-user"));
}
