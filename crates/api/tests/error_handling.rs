//! Tests for `AppError` → HTTP response mapping.
//!
//! These call `IntoResponse` directly on `AppError` values; no router is
//! involved.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use organizer_api::error::AppError;
use organizer_core::error::CoreError;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

// ---------------------------------------------------------------------------
// Test: CoreError::NotImplemented maps to 501
// ---------------------------------------------------------------------------

#[tokio::test]
async fn not_implemented_returns_501() {
    let err = AppError::Core(CoreError::not_implemented("ProjectDTO", "cast"));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_IMPLEMENTED);
    assert_eq!(json["code"], "NOT_IMPLEMENTED");
    assert_eq!(json["error"], "cast is not implemented for ProjectDTO");
}

// ---------------------------------------------------------------------------
// Test: CoreError::UnknownEntity maps to 404
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_entity_returns_404() {
    let (status, json) =
        error_to_response(AppError::Core(CoreError::UnknownEntity("widget".into()))).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
}

// ---------------------------------------------------------------------------
// Test: null and cast failures map to 400
// ---------------------------------------------------------------------------

#[tokio::test]
async fn null_argument_returns_400() {
    let (status, json) =
        error_to_response(AppError::Core(CoreError::NullArgument("assignments"))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(json["error"], "Value cannot be null: assignments");
}

#[tokio::test]
async fn invalid_cast_returns_400() {
    let err = AppError::Core(CoreError::InvalidCast {
        expected: "FeatureDTO",
        found: "GroupDTO",
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Cannot cast GroupDTO to FeatureDTO");
}

// ---------------------------------------------------------------------------
// Test: serialization failures map to INVALID_PAYLOAD
// ---------------------------------------------------------------------------

#[tokio::test]
async fn serialization_error_returns_invalid_payload() {
    let serde_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let (status, json) = error_to_response(AppError::Core(serde_err.into())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "INVALID_PAYLOAD");
}

// ---------------------------------------------------------------------------
// Test: AppError::InternalError maps to 500 and sanitizes the message
// ---------------------------------------------------------------------------

#[tokio::test]
async fn internal_error_returns_500_and_sanitizes_message() {
    let err = AppError::InternalError("encoder exploded".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
}
