use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    routing::{get, post},
};
use axum_helpers::LenientUuid;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::UserResult;
use crate::models::{CreateUser, CreatedUser, ListRequest, UpdateUser, User, UserType};
use crate::repository::UserRepository;
use crate::response::UserResponse;
use crate::service::UserService;

/// OpenAPI documentation for the Users API
#[derive(OpenApi)]
#[openapi(
    paths(create_user, get_user, update_user, delete_user, list_users),
    components(schemas(
        User,
        UserType,
        CreateUser,
        UpdateUser,
        ListRequest,
        CreatedUser,
        UserResponse<User>,
        UserResponse<Vec<User>>,
        UserResponse<CreatedUser>,
        UserResponse<String>,
    )),
    tags(
        (name = "Users", description = "User account endpoints (MongoDB)")
    )
)]
pub struct ApiDoc;

/// Create the users router with all HTTP endpoints
///
/// The body extractors are taken as `Result` so a rejection renders through
/// the domain envelope instead of axum's plain-text default.
pub fn router<R: UserRepository + 'static>(service: UserService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/create", post(create_user))
        .route("/all", post(list_users))
        .route(
            "/{userId}",
            get(get_user).put(update_user).delete(delete_user),
        )
        .with_state(shared_service)
}

/// Create a new user
#[utoipa::path(
    post,
    path = "/create",
    tag = "Users",
    request_body = CreateUser,
    responses(
        (status = 201, description = "User created", body = UserResponse<CreatedUser>),
        (status = 400, description = "Malformed body or failed validation", body = UserResponse<String>),
        (status = 500, description = "Storage failure", body = UserResponse<String>)
    )
)]
async fn create_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    payload: Result<Json<CreateUser>, JsonRejection>,
) -> UserResult<UserResponse<CreatedUser>> {
    let Json(input) = payload?;
    let created = service.create_user(input).await?;
    Ok(UserResponse::success(StatusCode::CREATED, created))
}

/// Get a user by ID
#[utoipa::path(
    get,
    path = "/{userId}",
    tag = "Users",
    params(
        ("userId" = String, Path, description = "User ID; a non-UUID value behaves as the nil ID")
    ),
    responses(
        (status = 200, description = "User found", body = UserResponse<User>),
        (status = 500, description = "Missing record or storage failure", body = UserResponse<String>)
    )
)]
async fn get_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    LenientUuid(id): LenientUuid,
) -> UserResult<UserResponse<User>> {
    let user = service.get_user(id).await?;
    Ok(UserResponse::success(StatusCode::OK, user))
}

/// Update a user's name fields
#[utoipa::path(
    put,
    path = "/{userId}",
    tag = "Users",
    params(
        ("userId" = String, Path, description = "User ID; a non-UUID value behaves as the nil ID")
    ),
    request_body = UpdateUser,
    responses(
        (status = 200, description = "Updated user", body = UserResponse<User>),
        (status = 400, description = "Malformed body", body = UserResponse<String>),
        (status = 404, description = "No record matched", body = UserResponse<String>),
        (status = 500, description = "Storage failure", body = UserResponse<String>)
    )
)]
async fn update_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    LenientUuid(id): LenientUuid,
    payload: Result<Json<UpdateUser>, JsonRejection>,
) -> UserResult<UserResponse<User>> {
    let Json(input) = payload?;
    let user = service.update_user(id, input).await?;
    Ok(UserResponse::success(StatusCode::OK, user))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/{userId}",
    tag = "Users",
    params(
        ("userId" = String, Path, description = "User ID; a non-UUID value behaves as the nil ID")
    ),
    responses(
        (status = 200, description = "User deleted", body = UserResponse<String>),
        (status = 404, description = "No record matched", body = UserResponse<String>),
        (status = 500, description = "Storage failure", body = UserResponse<String>)
    )
)]
async fn delete_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    LenientUuid(id): LenientUuid,
) -> UserResult<UserResponse<&'static str>> {
    service.delete_user(id).await?;
    Ok(UserResponse::success(
        StatusCode::OK,
        "User successfully deleted!",
    ))
}

/// List one page of users
#[utoipa::path(
    post,
    path = "/all",
    tag = "Users",
    request_body = ListRequest,
    responses(
        (status = 200, description = "Page of users", body = UserResponse<Vec<User>>),
        (status = 400, description = "Malformed body", body = UserResponse<String>),
        (status = 500, description = "Storage failure", body = UserResponse<String>)
    )
)]
async fn list_users<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    payload: Result<Json<ListRequest>, JsonRejection>,
) -> UserResult<UserResponse<Vec<User>>> {
    let Json(request) = payload?;
    let users = service.list_users(request).await?;
    Ok(UserResponse::success(StatusCode::OK, users))
}
