use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors;

pub const NAME_MAX_LEN: usize = 100;
pub const EMAIL_MAX_LEN: usize = 255;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "teacher")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub first_name: String,
    pub middle_initial: Option<String>,
    pub last_name: String,
    pub email: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match *self {}
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// The stored initial as a `char`; a malformed multi-char value yields its first char.
    pub fn middle_initial_char(&self) -> Option<char> {
        self.middle_initial.as_deref().and_then(|s| s.chars().next())
    }
}

/// Required name field: must contain a non-whitespace character and fit the column.
pub fn validate_name(field: &str, value: &str) -> Result<(), errors::ModelError> {
    if value.trim().is_empty() {
        return Err(errors::ModelError::Validation(format!("{field} is required")));
    }
    if value.chars().count() > NAME_MAX_LEN {
        return Err(errors::ModelError::Validation(format!("{field} must be at most {NAME_MAX_LEN} characters")));
    }
    Ok(())
}

pub fn validate_middle_initial(initial: Option<char>) -> Result<Option<String>, errors::ModelError> {
    match initial {
        None => Ok(None),
        Some(c) if c.is_whitespace() || c.is_control() => {
            Err(errors::ModelError::Validation("middle_initial must be a printable character".into()))
        }
        Some(c) => Ok(Some(c.to_string())),
    }
}

pub fn validate_email(email: Option<&str>) -> Result<(), errors::ModelError> {
    if let Some(e) = email {
        if e.chars().count() > EMAIL_MAX_LEN {
            return Err(errors::ModelError::Validation(format!("email must be at most {EMAIL_MAX_LEN} characters")));
        }
    }
    Ok(())
}
