use crate::ApiError;

use std::panic::Location;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use error_location::ErrorLocation;
use hb_auth::AuthError;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn given_token_unavailable_when_rendered_then_exact_two_field_body() {
    let error = ApiError::TokenUnavailable {
        header: String::from("x-forwarded-access-token"),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"], "No access token available");
    assert_eq!(
        json["message"],
        "The x-forwarded-access-token header is not present in the request"
    );
    assert_eq!(json.as_object().unwrap().len(), 2);
}

#[tokio::test]
async fn given_unauthenticated_when_rendered_then_401_with_error_field() {
    let error = ApiError::Unauthenticated {
        message: String::from("The x-forwarded-user header is not present in the request"),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"], "Authentication required");
}

#[tokio::test]
async fn given_missing_header_auth_error_when_converted_then_message_names_header() {
    let auth_error = AuthError::MissingIdentityHeader {
        header: String::from("x-forwarded-user"),
        location: ErrorLocation::from(Location::caller()),
    };

    let api_error = ApiError::from(auth_error);

    let (status, json) = body_json(api_error).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        json["message"],
        "The x-forwarded-user header is not present in the request"
    );
}
