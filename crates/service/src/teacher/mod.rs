//! Teacher resource: domain types, criteria query, repository and service.

pub mod domain;
pub mod mapping;
pub mod query;
pub mod repository;
pub mod service;

pub use domain::{SearchCriteria, TeacherDto, TeacherInput};
pub use query::TeacherQuery;
pub use repository::TeacherRepository;
pub use service::TeacherService;
