//! User repository trait

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::UserResult;
use crate::models::{CreateUser, UpdateFields, User, UserFilter};

/// Sort direction for find-many queries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// MongoDB sort value
    pub fn as_i32(self) -> i32 {
        match self {
            SortDirection::Ascending => 1,
            SortDirection::Descending => -1,
        }
    }
}

/// Sort specification for find-many queries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub field: String,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn ascending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Descending,
        }
    }
}

/// Repository trait for user storage operations
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Build a record from the payload, mint its identifier and insert it
    async fn insert(&self, input: CreateUser) -> UserResult<Uuid>;

    /// Fetch a user by identifier
    async fn find_by_id(&self, id: Uuid) -> UserResult<Option<User>>;

    /// Apply a partial update, returning the matched document count
    async fn update_by_id(&self, id: Uuid, fields: UpdateFields) -> UserResult<u64>;

    /// Delete a user, returning the deleted document count
    async fn delete_by_id(&self, id: Uuid) -> UserResult<u64>;

    /// Find users matching the filter, sorted and paginated.
    /// A zero limit imposes no cap.
    async fn find_many(
        &self,
        filter: UserFilter,
        sort: SortSpec,
        skip: u64,
        limit: i64,
    ) -> UserResult<Vec<User>>;
}
