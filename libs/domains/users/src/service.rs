//! User Service - Business logic layer

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::error::{UserError, UserResult};
use crate::models::{CreateUser, CreatedUser, ListRequest, UpdateUser, User, UserFilter};
use crate::repository::{SortSpec, UserRepository};

/// Time budget for one operation's storage work
const STORAGE_DEADLINE: Duration = Duration::from_secs(10);

/// User service providing business logic operations
///
/// The service layer handles validation, default assignment, and orchestrates
/// repository operations. Each operation's storage work runs under its own
/// deadline; exceeding it fails only that request.
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
    deadline: Duration,
}

impl<R: UserRepository> UserService<R> {
    /// Create a new UserService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
            deadline: STORAGE_DEADLINE,
        }
    }

    /// Override the storage deadline
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = deadline;
        self
    }

    async fn deadline_bounded<T>(
        &self,
        work: impl Future<Output = UserResult<T>>,
    ) -> UserResult<T> {
        tokio::time::timeout(self.deadline, work)
            .await
            .map_err(|_| UserError::Timeout(self.deadline))?
    }

    /// Create a user
    #[instrument(skip(self, input), fields(user_email = %input.email))]
    pub async fn create_user(&self, input: CreateUser) -> UserResult<CreatedUser> {
        input.validate()?;

        let inserted_id = self.deadline_bounded(self.repository.insert(input)).await?;

        Ok(CreatedUser { inserted_id })
    }

    /// Get a user by ID
    ///
    /// A missing record surfaces as a storage failure here; only delete
    /// reports not-found explicitly.
    #[instrument(skip(self))]
    pub async fn get_user(&self, id: Uuid) -> UserResult<User> {
        self.deadline_bounded(self.repository.find_by_id(id))
            .await?
            .ok_or_else(|| UserError::Storage(format!("no document matched user {id}")))
    }

    /// Update a user's name fields and return the updated record
    ///
    /// An empty field set is still sent through as a no-op. A zero match
    /// reports not-found instead of echoing an empty record.
    #[instrument(skip(self, input))]
    pub async fn update_user(&self, id: Uuid, input: UpdateUser) -> UserResult<User> {
        let fields = input.into_fields();

        self.deadline_bounded(async {
            let matched = self.repository.update_by_id(id, fields).await?;
            if matched != 1 {
                return Err(UserError::NotFound(id));
            }

            self.repository
                .find_by_id(id)
                .await?
                .ok_or_else(|| UserError::Storage(format!("user {id} vanished after update")))
        })
        .await
    }

    /// Delete a user
    #[instrument(skip(self))]
    pub async fn delete_user(&self, id: Uuid) -> UserResult<()> {
        let deleted = self
            .deadline_bounded(self.repository.delete_by_id(id))
            .await?;

        if deleted < 1 {
            return Err(UserError::NotFound(id));
        }
        Ok(())
    }

    /// List one page of users
    ///
    /// Pages walk the collection in fixed first-name ascending order; the
    /// request's sort parameters are accepted but not applied.
    #[instrument(skip(self, request), fields(page = request.page, page_size = request.page_size))]
    pub async fn list_users(&self, request: ListRequest) -> UserResult<Vec<User>> {
        let skip = request.page.saturating_mul(request.page_size);
        let limit = i64::try_from(request.page_size).unwrap_or(i64::MAX);

        self.deadline_bounded(self.repository.find_many(
            UserFilter::default(),
            SortSpec::ascending("fname"),
            skip,
            limit,
        ))
        .await
    }
}

impl<R: UserRepository> Clone for UserService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            deadline: self.deadline,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{UpdateFields, UserType};
    use crate::repository::{MockUserRepository, SortDirection};
    use async_trait::async_trait;
    use axum::http::StatusCode;
    use mockall::predicate::eq;

    fn valid_input() -> CreateUser {
        CreateUser {
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
            email: "grace@example.com".to_string(),
            mobile_no: "5550100".to_string(),
            password: "secret".to_string(),
        }
    }

    fn stored_user(id: Uuid) -> User {
        User {
            id,
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
            user_name: "5550100".to_string(),
            email: "grace@example.com".to_string(),
            mobile_no: "5550100".to_string(),
            password: "secret".to_string(),
            user_type: UserType::User,
            active: true,
        }
    }

    #[tokio::test]
    async fn test_create_user_returns_inserted_id() {
        let mut mock_repo = MockUserRepository::new();
        let id = Uuid::now_v7();

        mock_repo.expect_insert().returning(move |_| Ok(id));

        let service = UserService::new(mock_repo);
        let created = service.create_user(valid_input()).await.unwrap();

        assert_eq!(created.inserted_id, id);
    }

    #[tokio::test]
    async fn test_create_user_rejects_invalid_payload_before_storage() {
        // No expectations: touching the repository would panic
        let mock_repo = MockUserRepository::new();

        let mut input = valid_input();
        input.email = "not-an-email".to_string();

        let service = UserService::new(mock_repo);
        let err = service.create_user(input).await.unwrap_err();

        assert!(matches!(err, UserError::Validation(_)));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_get_user_folds_missing_record_into_storage_error() {
        let mut mock_repo = MockUserRepository::new();
        let id = Uuid::now_v7();

        mock_repo
            .expect_find_by_id()
            .with(eq(id))
            .returning(|_| Ok(None));

        let service = UserService::new(mock_repo);
        let err = service.get_user(id).await.unwrap_err();

        assert!(matches!(err, UserError::Storage(_)));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_update_user_zero_match_reports_not_found() {
        let mut mock_repo = MockUserRepository::new();
        let id = Uuid::now_v7();

        mock_repo
            .expect_update_by_id()
            .with(eq(id), eq(UpdateFields::default()))
            .returning(|_, _| Ok(0));

        let service = UserService::new(mock_repo);
        let err = service.update_user(id, UpdateUser::default()).await.unwrap_err();

        assert!(matches!(err, UserError::NotFound(_)));
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_update_user_refetches_after_match() {
        let mut mock_repo = MockUserRepository::new();
        let id = Uuid::now_v7();

        let expected_fields = UpdateFields {
            first_name: None,
            last_name: Some("Curie".to_string()),
        };
        mock_repo
            .expect_update_by_id()
            .with(eq(id), eq(expected_fields))
            .returning(|_, _| Ok(1));
        mock_repo
            .expect_find_by_id()
            .with(eq(id))
            .returning(move |_| Ok(Some(stored_user(id))));

        let update = UpdateUser {
            first_name: Some(String::new()),
            last_name: Some("Curie".to_string()),
        };

        let service = UserService::new(mock_repo);
        let user = service.update_user(id, update).await.unwrap();

        assert_eq!(user.id, id);
    }

    #[tokio::test]
    async fn test_delete_user_zero_deleted_reports_not_found() {
        let mut mock_repo = MockUserRepository::new();
        let id = Uuid::now_v7();

        mock_repo
            .expect_delete_by_id()
            .with(eq(id))
            .returning(|_| Ok(0));

        let service = UserService::new(mock_repo);
        let err = service.delete_user(id).await.unwrap_err();

        assert!(matches!(err, UserError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_user_succeeds_on_one_deleted() {
        let mut mock_repo = MockUserRepository::new();
        let id = Uuid::now_v7();

        mock_repo
            .expect_delete_by_id()
            .with(eq(id))
            .returning(|_| Ok(1));

        let service = UserService::new(mock_repo);
        assert!(service.delete_user(id).await.is_ok());
    }

    #[tokio::test]
    async fn test_list_ignores_requested_sort_parameters() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo
            .expect_find_many()
            .withf(|filter, sort, skip, limit| {
                filter.active.is_none()
                    && sort.field == "fname"
                    && sort.direction == SortDirection::Ascending
                    && *skip == 20
                    && *limit == 10
            })
            .returning(|_, _, _, _| Ok(vec![]));

        let request = ListRequest {
            page: 2,
            page_size: 10,
            sort_by: "email".to_string(),
            sort_order: -1,
        };

        let service = UserService::new(mock_repo);
        assert!(service.list_users(request).await.is_ok());
    }

    #[tokio::test]
    async fn test_list_zero_page_size_means_no_limit() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo
            .expect_find_many()
            .withf(|_, _, skip, limit| *skip == 0 && *limit == 0)
            .returning(|_, _, _, _| Ok(vec![]));

        let service = UserService::new(mock_repo);
        assert!(service.list_users(ListRequest::default()).await.is_ok());
    }

    struct SlowRepository;

    #[async_trait]
    impl UserRepository for SlowRepository {
        async fn insert(&self, _input: CreateUser) -> UserResult<Uuid> {
            unimplemented!()
        }

        async fn find_by_id(&self, _id: Uuid) -> UserResult<Option<User>> {
            tokio::time::sleep(Duration::from_millis(200)).await;
            Ok(None)
        }

        async fn update_by_id(&self, _id: Uuid, _fields: UpdateFields) -> UserResult<u64> {
            unimplemented!()
        }

        async fn delete_by_id(&self, _id: Uuid) -> UserResult<u64> {
            unimplemented!()
        }

        async fn find_many(
            &self,
            _filter: UserFilter,
            _sort: SortSpec,
            _skip: u64,
            _limit: i64,
        ) -> UserResult<Vec<User>> {
            unimplemented!()
        }
    }

    #[tokio::test]
    async fn test_deadline_bounds_slow_storage_calls() {
        let service =
            UserService::new(SlowRepository).with_deadline(Duration::from_millis(10));

        let err = service.get_user(Uuid::nil()).await.unwrap_err();

        assert!(matches!(err, UserError::Timeout(_)));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
