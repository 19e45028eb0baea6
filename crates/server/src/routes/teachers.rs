use std::collections::BTreeMap;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use service::teacher::{SearchCriteria, TeacherDto, TeacherInput};
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::{ApiError, DELETE_NOT_FOUND, UPDATE_NOT_FOUND};
use crate::routes::ServerState;

#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// Exact, case-sensitive first name
    pub first_name: Option<String>,
    /// Exact, case-sensitive last name
    pub last_name: Option<String>,
    /// Exact email
    pub email: Option<String>,
    /// 1-based page index
    pub page: Option<u32>,
    /// Page size, at most 25
    pub limit: Option<u32>,
}

impl From<ListQuery> for SearchCriteria {
    fn from(q: ListQuery) -> Self {
        Self { first_name: q.first_name, last_name: q.last_name, email: q.email, page: q.page, limit: q.limit }
    }
}

fn single_error(field: &str, message: String) -> ApiError {
    ApiError::field_errors(BTreeMap::from([(field.to_string(), vec![message])]))
}

fn path_id(path: Result<Path<Uuid>, PathRejection>) -> Result<Uuid, ApiError> {
    path.map(|Path(id)| id).map_err(|e| single_error("id", e.body_text()))
}

/// Body must parse and carry both names; mirrors required-attribute validation.
fn validated_input(body: Result<Json<TeacherInput>, JsonRejection>) -> Result<TeacherInput, ApiError> {
    let Json(input) = body.map_err(|e| single_error("$", e.body_text()))?;
    let mut errors = BTreeMap::new();
    for (field, value) in [("FirstName", &input.first_name), ("LastName", &input.last_name)] {
        if value.trim().is_empty() {
            errors.insert(field.to_string(), vec![format!("The {field} field is required.")]);
        }
    }
    if errors.is_empty() {
        Ok(input)
    } else {
        warn!(fields = ?errors.keys().collect::<Vec<_>>(), "teacher_input_rejected");
        Err(ApiError::field_errors(errors))
    }
}

/// Gets teachers with optional query params. Returns max of 25 teachers.
#[utoipa::path(
    get, path = "/teachers", tag = "teachers",
    params(ListQuery),
    responses(
        (status = 200, description = "Matching teachers, possibly empty", body = [crate::openapi::TeacherDoc]),
        (status = 400, description = "Malformed query"),
        (status = 500, description = "Unexpected error, body is the message")
    )
)]
pub async fn list(
    State(state): State<ServerState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<Vec<TeacherDto>>, ApiError> {
    let Query(q) = query.map_err(|e| single_error("query", e.body_text()))?;
    let criteria: SearchCriteria = q.into();
    let list = state.teachers.list(&criteria).await?;
    info!(count = list.len(), "list teachers");
    Ok(Json(list))
}

/// Get Teacher by Id. An unknown id answers 200 with `{}`.
#[utoipa::path(
    get, path = "/teachers/{id}", tag = "teachers",
    params(("id" = Uuid, Path, description = "Teacher ID")),
    responses(
        (status = 200, description = "Teacher, or an empty object when absent", body = crate::openapi::TeacherDoc),
        (status = 500, description = "Unexpected error")
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<Response, ApiError> {
    let id = path_id(path)?;
    match state.teachers.get_by_id(id).await? {
        Some(dto) => Ok(Json(dto).into_response()),
        None => {
            info!(%id, "teacher not found");
            Ok((StatusCode::OK, Json(serde_json::json!({}))).into_response())
        }
    }
}

/// Create a new Teacher
#[utoipa::path(
    post, path = "/teachers", tag = "teachers",
    request_body = crate::openapi::TeacherInputDoc,
    responses(
        (status = 201, description = "Created; Location points at the new teacher", body = crate::openapi::TeacherDoc),
        (status = 400, description = "Validation problem"),
        (status = 500, description = "Unexpected error")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    body: Result<Json<TeacherInput>, JsonRejection>,
) -> Result<Response, ApiError> {
    let input = validated_input(body)?;
    let dto = state.teachers.create(input).await?;
    let location = format!("/teachers/{}", dto.id);
    info!(id = %dto.id, "created teacher");
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(dto)).into_response())
}

/// Update a Teacher by Id
#[utoipa::path(
    put, path = "/teachers/{id}", tag = "teachers",
    params(("id" = Uuid, Path, description = "Teacher ID")),
    request_body = crate::openapi::TeacherInputDoc,
    responses(
        (status = 200, description = "Updated, empty body"),
        (status = 400, description = "Validation problem, including unknown id"),
        (status = 500, description = "Unexpected error")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    path: Result<Path<Uuid>, PathRejection>,
    body: Result<Json<TeacherInput>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let id = path_id(path)?;
    let input = validated_input(body)?;
    state
        .teachers
        .update_by_id(id, input)
        .await
        .map_err(|e| ApiError::from_service(e, UPDATE_NOT_FOUND))?;
    info!(%id, "updated teacher");
    Ok(StatusCode::OK)
}

/// Delete a Teacher by Id
#[utoipa::path(
    delete, path = "/teachers/{id}", tag = "teachers",
    params(("id" = Uuid, Path, description = "Teacher ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 400, description = "Validation problem, including unknown id"),
        (status = 500, description = "Unexpected error")
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let id = path_id(path)?;
    state
        .teachers
        .delete_by_id(id)
        .await
        .map_err(|e| ApiError::from_service(e, DELETE_NOT_FOUND))?;
    info!(%id, "deleted teacher");
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_query_maps_every_field() {
        let q = ListQuery {
            first_name: Some("Ada".into()),
            last_name: Some("Lovelace".into()),
            email: None,
            page: Some(2),
            limit: Some(10),
        };
        let c: SearchCriteria = q.into();
        assert_eq!(c.first_name.as_deref(), Some("Ada"));
        assert_eq!(c.last_name.as_deref(), Some("Lovelace"));
        assert_eq!((c.page, c.limit), (Some(2), Some(10)));
    }

    #[test]
    fn blank_names_produce_field_errors() {
        let err = validated_input(Ok(Json(TeacherInput::new(" ", "")))).unwrap_err();
        match err {
            ApiError::ValidationProblem { detail, errors } => {
                assert!(detail.is_none());
                assert_eq!(errors["FirstName"], vec!["The FirstName field is required.".to_string()]);
                assert!(errors.contains_key("LastName"));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn complete_input_passes_through() {
        let input = TeacherInput::new("Ada", "Lovelace");
        assert_eq!(validated_input(Ok(Json(input.clone()))).unwrap(), input);
    }
}
