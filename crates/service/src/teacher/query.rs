//! Criteria query for teacher lookups.
//!
//! A [`TeacherQuery`] is the normalized form of [`SearchCriteria`]: present
//! filters are ANDed as exact, case-sensitive matches, results are ordered by
//! ascending `id`, and a single query never yields more than
//! [`MAX_RESULTS`] rows. The same value drives both the SQL `Select` used by
//! the database repository and the in-memory evaluation used by the mock
//! repository, so the two backends agree row for row.

use models::teacher;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Select};

use super::domain::SearchCriteria;
use crate::pagination::{Pagination, MAX_PAGE_SIZE};

pub const MAX_RESULTS: u64 = MAX_PAGE_SIZE as u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeacherQuery {
    first_name: Option<String>,
    last_name: Option<String>,
    email: Option<String>,
    offset: u64,
    limit: u64,
}

impl Default for TeacherQuery {
    fn default() -> Self {
        Self { first_name: None, last_name: None, email: None, offset: 0, limit: MAX_RESULTS }
    }
}

/// Blank or whitespace-only query values (`?email=`) count as absent.
fn present(v: &Option<String>) -> Option<String> {
    v.as_ref().filter(|s| !s.trim().is_empty()).cloned()
}

impl TeacherQuery {
    pub fn from_criteria(criteria: &SearchCriteria) -> Self {
        let (offset, limit) = Pagination::from_hints(criteria.page, criteria.limit).normalize();
        Self {
            first_name: present(&criteria.first_name),
            last_name: present(&criteria.last_name),
            email: present(&criteria.email),
            offset,
            limit,
        }
    }

    pub fn limit(&self) -> u64 { self.limit }

    pub fn offset(&self) -> u64 { self.offset }

    pub fn has_filters(&self) -> bool {
        self.first_name.is_some() || self.last_name.is_some() || self.email.is_some()
    }

    /// SQL form: filters, `ORDER BY id ASC`, then the offset/limit window.
    pub fn select(&self) -> Select<teacher::Entity> {
        let mut finder = teacher::Entity::find();
        if let Some(v) = &self.first_name { finder = finder.filter(teacher::Column::FirstName.eq(v.as_str())); }
        if let Some(v) = &self.last_name { finder = finder.filter(teacher::Column::LastName.eq(v.as_str())); }
        if let Some(v) = &self.email { finder = finder.filter(teacher::Column::Email.eq(v.as_str())); }
        let finder = finder.order_by_asc(teacher::Column::Id).limit(self.limit);
        if self.offset > 0 { finder.offset(self.offset) } else { finder }
    }

    pub fn matches(&self, record: &teacher::Model) -> bool {
        fn eq(want: &Option<String>, have: Option<&str>) -> bool {
            want.as_deref().map_or(true, |w| have == Some(w))
        }
        eq(&self.first_name, Some(record.first_name.as_str()))
            && eq(&self.last_name, Some(record.last_name.as_str()))
            && eq(&self.email, record.email.as_deref())
    }

    /// In-memory form of [`select`](Self::select) over an arbitrary record source.
    pub fn apply<'a, I>(&self, records: I) -> Vec<teacher::Model>
    where
        I: IntoIterator<Item = &'a teacher::Model>,
    {
        let mut hits: Vec<&teacher::Model> = records.into_iter().filter(|r| self.matches(r)).collect();
        hits.sort_by_key(|r| r.id);
        hits.into_iter()
            .skip(self.offset as usize)
            .take(self.limit as usize)
            .cloned()
            .collect()
    }
}
