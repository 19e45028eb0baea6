use std::sync::Arc;

use tracing::{debug, info, instrument};
use uuid::Uuid;

use super::domain::{SearchCriteria, TeacherDto, TeacherInput};
use super::mapping::to_dto_list;
use super::query::TeacherQuery;
use super::repository::TeacherRepository;
use crate::errors::ServiceError;

/// Teacher CRUD independent of the web framework.
///
/// Not-found is part of the return type: `get_by_id` yields `Ok(None)`, while
/// `update_by_id` and `delete_by_id` yield [`ServiceError::NotFound`] without
/// touching storage.
pub struct TeacherService {
    repo: Arc<dyn TeacherRepository>,
}

impl TeacherService {
    pub fn new(repo: Arc<dyn TeacherRepository>) -> Self { Self { repo } }

    /// List up to 25 teachers matching every present criterion, ordered by id.
    ///
    /// # Examples
    /// ```
    /// use service::teacher::{TeacherService, SearchCriteria, repository::mock::InMemoryTeacherRepository};
    /// use std::sync::Arc;
    /// let svc = TeacherService::new(Arc::new(InMemoryTeacherRepository::default()));
    /// let found = tokio_test::block_on(svc.list(&SearchCriteria::default())).unwrap();
    /// assert!(found.is_empty());
    /// ```
    #[instrument(skip(self))]
    pub async fn list(&self, criteria: &SearchCriteria) -> Result<Vec<TeacherDto>, ServiceError> {
        let query = TeacherQuery::from_criteria(criteria);
        let rows = self.repo.find_by_criteria(&query).await?;
        debug!(count = rows.len(), filtered = query.has_filters(), "teacher_list");
        Ok(to_dto_list(rows))
    }

    #[instrument(skip(self), fields(id = %id))]
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<TeacherDto>, ServiceError> {
        Ok(self.repo.find_by_id(id).await?.map(TeacherDto::from))
    }

    /// Create a teacher under a freshly generated id.
    ///
    /// # Examples
    /// ```
    /// use service::teacher::{TeacherService, TeacherInput, repository::mock::InMemoryTeacherRepository};
    /// use std::sync::Arc;
    /// let svc = TeacherService::new(Arc::new(InMemoryTeacherRepository::default()));
    /// let created = tokio_test::block_on(svc.create(TeacherInput::new("Ada", "Lovelace"))).unwrap();
    /// let fetched = tokio_test::block_on(svc.get_by_id(created.id)).unwrap();
    /// assert_eq!(fetched, Some(created));
    /// ```
    #[instrument(skip(self, input))]
    pub async fn create(&self, input: TeacherInput) -> Result<TeacherDto, ServiceError> {
        let record = input.into_record(Uuid::new_v4())?;
        let created = self.repo.insert(record).await?;
        info!(id = %created.id, "teacher_created");
        Ok(created.into())
    }

    /// Replace every mutable field of an existing teacher.
    #[instrument(skip(self, input), fields(id = %id))]
    pub async fn update_by_id(&self, id: Uuid, input: TeacherInput) -> Result<TeacherDto, ServiceError> {
        if self.repo.find_by_id(id).await?.is_none() {
            return Err(ServiceError::not_found("teacher"));
        }
        let record = input.into_record(id)?;
        let updated = self.repo.update(record).await?;
        info!(id = %id, "teacher_updated");
        Ok(updated.into())
    }

    #[instrument(skip(self), fields(id = %id))]
    pub async fn delete_by_id(&self, id: Uuid) -> Result<(), ServiceError> {
        if self.repo.find_by_id(id).await?.is_none() {
            return Err(ServiceError::not_found("teacher"));
        }
        if !self.repo.delete(id).await? {
            // removed concurrently after the existence check
            return Err(ServiceError::not_found("teacher"));
        }
        info!(id = %id, "teacher_deleted");
        Ok(())
    }
}
