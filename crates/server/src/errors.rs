use std::collections::BTreeMap;

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::error;

pub const DELETE_NOT_FOUND: &str = "This teacher could not be found. No delete action has been taken.";
pub const UPDATE_NOT_FOUND: &str = "This teacher could not be found. No update action has been taken.";

const PROBLEM_TYPE: &str = "https://tools.ietf.org/html/rfc7231#section-6.5.1";
const PROBLEM_TITLE: &str = "One or more validation errors occurred.";

/// RFC 7807 body for 400 responses.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ProblemDetails {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub title: &'static str,
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    pub errors: BTreeMap<String, Vec<String>>,
}

/// Boundary error: everything a handler can fail with, already classified by status.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("validation problem: {detail:?}")]
    ValidationProblem {
        detail: Option<String>,
        errors: BTreeMap<String, Vec<String>>,
    },
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn problem(detail: impl Into<String>) -> Self {
        Self::ValidationProblem { detail: Some(detail.into()), errors: BTreeMap::new() }
    }

    pub fn field_errors(errors: BTreeMap<String, Vec<String>>) -> Self {
        Self::ValidationProblem { detail: None, errors }
    }

    /// Map a service failure, using `not_found_detail` for [`ServiceError::NotFound`].
    pub fn from_service(e: ServiceError, not_found_detail: &str) -> Self {
        match e {
            ServiceError::NotFound(_) => Self::problem(not_found_detail),
            other => other.into(),
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        if e.is_validation() {
            Self::problem(e.to_string())
        } else {
            Self::Internal(e.to_string())
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::ValidationProblem { detail, errors } => {
                let body = ProblemDetails {
                    kind: PROBLEM_TYPE,
                    title: PROBLEM_TITLE,
                    status: StatusCode::BAD_REQUEST.as_u16(),
                    detail,
                    errors,
                };
                (
                    StatusCode::BAD_REQUEST,
                    [(header::CONTENT_TYPE, "application/problem+json")],
                    Json(body),
                )
                    .into_response()
            }
            ApiError::Internal(msg) => {
                error!(error = %msg, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, msg).into_response()
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("database unavailable: {0}")]
    Database(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::errors::ModelError;

    #[test]
    fn problem_details_serialize_like_aspnet() {
        let body = ProblemDetails {
            kind: PROBLEM_TYPE,
            title: PROBLEM_TITLE,
            status: 400,
            detail: Some(DELETE_NOT_FOUND.into()),
            errors: BTreeMap::new(),
        };
        let v = serde_json::to_value(&body).unwrap();
        assert_eq!(v["type"], PROBLEM_TYPE);
        assert_eq!(v["status"], 400);
        assert_eq!(v["detail"], DELETE_NOT_FOUND);
        assert!(v["errors"].as_object().unwrap().is_empty());
    }

    #[test]
    fn service_errors_classify_by_kind() {
        let e = ApiError::from_service(ServiceError::not_found("teacher"), UPDATE_NOT_FOUND);
        assert!(matches!(e, ApiError::ValidationProblem { detail: Some(ref d), .. } if d == UPDATE_NOT_FOUND));

        let e: ApiError = ServiceError::Model(ModelError::Validation("first_name is required".into())).into();
        assert!(matches!(e, ApiError::ValidationProblem { .. }));

        let e: ApiError = ServiceError::Db("boom".into()).into();
        assert!(matches!(e, ApiError::Internal(ref m) if m == "database error: boom"));
    }

    #[test]
    fn internal_maps_to_500_and_problem_to_400() {
        assert_eq!(ApiError::Internal("x".into()).into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
        let resp = ApiError::problem(DELETE_NOT_FOUND).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(resp.headers()[header::CONTENT_TYPE], "application/problem+json");
    }

    #[tokio::test]
    async fn problem_response_carries_json_body() {
        let resp = ApiError::problem(UPDATE_NOT_FOUND).into_response();
        assert_eq!(resp.headers()[header::CONTENT_TYPE], "application/problem+json");
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let v: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(v["title"], PROBLEM_TITLE);
        assert_eq!(v["status"], 400);
        assert_eq!(v["detail"], UPDATE_NOT_FOUND);
    }
}
