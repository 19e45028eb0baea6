use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Optional list filters. Every field is independent; `None` means "do not filter".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchCriteria {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    /// 1-based page index
    pub page: Option<u32>,
    /// Page size, clamped to `1..=25`
    pub limit: Option<u32>,
}

/// Externally visible shape of a teacher record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherDto {
    pub id: Uuid,
    pub first_name: String,
    pub middle_initial: Option<char>,
    pub last_name: String,
    pub email: Option<String>,
}

/// Create/update request body. The id always comes from the route or the service, never the body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherInput {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub middle_initial: Option<char>,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: Option<String>,
}

impl TeacherInput {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self { first_name: first_name.into(), last_name: last_name.into(), ..Self::default() }
    }
}
