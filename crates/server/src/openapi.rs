use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

/// Transfer shape of a teacher.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeacherDoc {
    pub id: Uuid,
    pub first_name: String,
    /// Single character
    pub middle_initial: Option<String>,
    pub last_name: String,
    pub email: Option<String>,
}

/// Create/update body. `firstName` and `lastName` are required.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeacherInputDoc {
    pub first_name: String,
    /// Single character
    pub middle_initial: Option<String>,
    pub last_name: String,
    pub email: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::teachers::list,
        crate::routes::teachers::get,
        crate::routes::teachers::create,
        crate::routes::teachers::update,
        crate::routes::teachers::delete,
    ),
    components(
        schemas(
            HealthResponse,
            TeacherDoc,
            TeacherInputDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "teachers")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_teacher_paths() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/teachers"));
        assert!(doc.paths.paths.contains_key("/teachers/{id}"));
        assert!(doc.paths.paths.contains_key("/health"));
    }
}
