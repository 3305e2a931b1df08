//! User handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};

use common::{AppError, AppResult, OptionExt};
use domain::{CreateUser, UpdateUser, User, UserFilter, UserListResponse};

use crate::api::extractors::{JsonBody, ListQuery};
use crate::api::AppState;

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/:id", get(get_user).put(update_user).delete(delete_user))
}

/// Parse a path segment as a user id.
fn parse_id(raw: &str) -> AppResult<i32> {
    raw.trim()
        .parse()
        .map_err(|_| AppError::bad_request("Invalid user ID"))
}

/// Create a new user
#[utoipa::path(
    post,
    path = "/api/users",
    tag = "Users",
    request_body = CreateUser,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Email already exists")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> AppResult<(StatusCode, Json<User>)> {
    let user = state.user_service.create_user(&body).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// List users with optional filters and pagination
#[utoipa::path(
    get,
    path = "/api/users",
    tag = "Users",
    params(UserFilter),
    responses(
        (status = 200, description = "Filtered page of users", body = UserListResponse),
        (status = 400, description = "Malformed query parameters")
    )
)]
pub async fn list_users(
    State(state): State<AppState>,
    ListQuery(filter): ListQuery,
) -> AppResult<Json<UserListResponse>> {
    let page = state.user_service.get_users(&filter).await?;
    Ok(Json(UserListResponse::new(page, &filter)))
}

/// Get user by ID
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = "Users",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User record", body = User),
        (status = 400, description = "Invalid user ID"),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<User>> {
    let id = parse_id(&id)?;
    let user = state.user_service.get_user_by_id(id).await?.ok_or_not_found()?;
    Ok(Json(user))
}

/// Update user fields; absent fields are left untouched
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = "Users",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    request_body = UpdateUser,
    responses(
        (status = 200, description = "User updated", body = User),
        (status = 400, description = "Validation error or invalid user ID"),
        (status = 404, description = "User not found"),
        (status = 409, description = "Email already exists")
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(body): JsonBody,
) -> AppResult<Json<User>> {
    let id = parse_id(&id)?;
    let user = state
        .user_service
        .update_user(id, &body)
        .await?
        .ok_or_not_found()?;
    Ok(Json(user))
}

/// Delete user
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = "Users",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "User deleted"),
        (status = 400, description = "Invalid user ID"),
        (status = 404, description = "User not found")
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let id = parse_id(&id)?;
    if state.user_service.delete_user(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound)
    }
}
