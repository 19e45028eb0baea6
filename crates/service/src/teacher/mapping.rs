//! Conversions between the stored record and the transfer shapes.

use models::teacher;
use uuid::Uuid;

use super::domain::{TeacherDto, TeacherInput};
use crate::errors::ServiceError;

impl From<teacher::Model> for TeacherDto {
    fn from(m: teacher::Model) -> Self {
        let middle_initial = m.middle_initial_char();
        Self {
            id: m.id,
            first_name: m.first_name,
            middle_initial,
            last_name: m.last_name,
            email: m.email,
        }
    }
}

pub fn to_dto_list(records: Vec<teacher::Model>) -> Vec<TeacherDto> {
    records.into_iter().map(TeacherDto::from).collect()
}

impl From<TeacherDto> for TeacherInput {
    fn from(d: TeacherDto) -> Self {
        Self {
            first_name: d.first_name,
            middle_initial: d.middle_initial,
            last_name: d.last_name,
            email: d.email,
        }
    }
}

impl TeacherInput {
    /// Validate and build the record stored under `id`. All mutable fields come from `self`;
    /// names are stored trimmed so exact-match filters find them.
    pub fn into_record(self, id: Uuid) -> Result<teacher::Model, ServiceError> {
        let first_name = self.first_name.trim();
        let last_name = self.last_name.trim();
        teacher::validate_name("first_name", first_name)?;
        teacher::validate_name("last_name", last_name)?;
        teacher::validate_email(self.email.as_deref())?;
        let middle_initial = teacher::validate_middle_initial(self.middle_initial)?;
        Ok(teacher::Model {
            id,
            first_name: first_name.to_string(),
            middle_initial,
            last_name: last_name.to_string(),
            email: self.email,
        })
    }
}
