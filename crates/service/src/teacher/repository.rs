use async_trait::async_trait;
use models::teacher;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set};
use uuid::Uuid;

use super::query::TeacherQuery;
use crate::errors::ServiceError;

/// Storage operations the teacher service depends on, keyed by `id`.
#[async_trait]
pub trait TeacherRepository: Send + Sync {
    async fn find_by_criteria(&self, query: &TeacherQuery) -> Result<Vec<teacher::Model>, ServiceError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<teacher::Model>, ServiceError>;
    async fn insert(&self, record: teacher::Model) -> Result<teacher::Model, ServiceError>;
    async fn update(&self, record: teacher::Model) -> Result<teacher::Model, ServiceError>;
    /// Returns true if a row was removed.
    async fn delete(&self, id: Uuid) -> Result<bool, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmTeacherRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmTeacherRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

fn active(m: teacher::Model) -> teacher::ActiveModel {
    teacher::ActiveModel {
        id: Set(m.id),
        first_name: Set(m.first_name),
        middle_initial: Set(m.middle_initial),
        last_name: Set(m.last_name),
        email: Set(m.email),
    }
}

#[async_trait]
impl TeacherRepository for SeaOrmTeacherRepository {
    async fn find_by_criteria(&self, query: &TeacherQuery) -> Result<Vec<teacher::Model>, ServiceError> {
        Ok(query.select().all(&self.db).await?)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<teacher::Model>, ServiceError> {
        Ok(teacher::Entity::find_by_id(id).one(&self.db).await?)
    }

    async fn insert(&self, record: teacher::Model) -> Result<teacher::Model, ServiceError> {
        Ok(active(record).insert(&self.db).await?)
    }

    async fn update(&self, record: teacher::Model) -> Result<teacher::Model, ServiceError> {
        match active(record).update(&self.db).await {
            Ok(m) => Ok(m),
            // row vanished between the existence check and the write
            Err(DbErr::RecordNotUpdated) => Err(ServiceError::not_found("teacher")),
            Err(e) => Err(e.into()),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ServiceError> {
        let res = teacher::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(res.rows_affected > 0)
    }
}

/// In-memory repositories for tests and database-less runs.
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::RwLock;

    fn poisoned<T>(_: T) -> ServiceError { ServiceError::Db("teacher store lock poisoned".into()) }

    /// Map-backed store that evaluates [`TeacherQuery`] exactly like the SQL form.
    #[derive(Default)]
    pub struct InMemoryTeacherRepository {
        rows: RwLock<BTreeMap<Uuid, teacher::Model>>,
    }

    impl InMemoryTeacherRepository {
        pub fn with_records(records: impl IntoIterator<Item = teacher::Model>) -> Self {
            let rows = records.into_iter().map(|r| (r.id, r)).collect();
            Self { rows: RwLock::new(rows) }
        }

        pub fn len(&self) -> usize {
            self.rows.read().map(|r| r.len()).unwrap_or(0)
        }

        pub fn is_empty(&self) -> bool { self.len() == 0 }
    }

    #[async_trait]
    impl TeacherRepository for InMemoryTeacherRepository {
        async fn find_by_criteria(&self, query: &TeacherQuery) -> Result<Vec<teacher::Model>, ServiceError> {
            let rows = self.rows.read().map_err(poisoned)?;
            Ok(query.apply(rows.values()))
        }

        async fn find_by_id(&self, id: Uuid) -> Result<Option<teacher::Model>, ServiceError> {
            let rows = self.rows.read().map_err(poisoned)?;
            Ok(rows.get(&id).cloned())
        }

        async fn insert(&self, record: teacher::Model) -> Result<teacher::Model, ServiceError> {
            let mut rows = self.rows.write().map_err(poisoned)?;
            if rows.contains_key(&record.id) {
                return Err(ServiceError::Db(format!("duplicate key: teacher {}", record.id)));
            }
            rows.insert(record.id, record.clone());
            Ok(record)
        }

        async fn update(&self, record: teacher::Model) -> Result<teacher::Model, ServiceError> {
            let mut rows = self.rows.write().map_err(poisoned)?;
            match rows.get_mut(&record.id) {
                Some(slot) => {
                    *slot = record.clone();
                    Ok(record)
                }
                None => Err(ServiceError::not_found("teacher")),
            }
        }

        async fn delete(&self, id: Uuid) -> Result<bool, ServiceError> {
            let mut rows = self.rows.write().map_err(poisoned)?;
            Ok(rows.remove(&id).is_some())
        }
    }

    /// Every call fails with a storage error carrying `message`.
    pub struct FailingTeacherRepository {
        pub message: String,
    }

    impl FailingTeacherRepository {
        pub fn new(message: impl Into<String>) -> Self { Self { message: message.into() } }

        fn err(&self) -> ServiceError { ServiceError::Db(self.message.clone()) }
    }

    #[async_trait]
    impl TeacherRepository for FailingTeacherRepository {
        async fn find_by_criteria(&self, _query: &TeacherQuery) -> Result<Vec<teacher::Model>, ServiceError> {
            Err(self.err())
        }

        async fn find_by_id(&self, _id: Uuid) -> Result<Option<teacher::Model>, ServiceError> {
            Err(self.err())
        }

        async fn insert(&self, _record: teacher::Model) -> Result<teacher::Model, ServiceError> {
            Err(self.err())
        }

        async fn update(&self, _record: teacher::Model) -> Result<teacher::Model, ServiceError> {
            Err(self.err())
        }

        async fn delete(&self, _id: Uuid) -> Result<bool, ServiceError> {
            Err(self.err())
        }
    }
}
