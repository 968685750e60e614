//! User management handlers
//!
//! Receive requests, delegate to the UserService and map the result
//! back to the API representation.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::api::dto::{ApiResponse, UserGetDto, UserPostRequest, UserProfileDto, UserUpdateRequest};
use crate::api::error::ApiError;
use crate::application::UserService;

/// State for user handlers
#[derive(Clone)]
pub struct UserHandlerState {
    pub service: Arc<UserService>,
}

/// List all users
///
/// Returns every user, unfiltered, in store-native order.
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    responses(
        (status = 200, description = "All users", body = [UserGetDto])
    )
)]
pub async fn list_users(
    State(state): State<UserHandlerState>,
) -> Result<Json<Vec<UserGetDto>>, ApiError> {
    let users = state.service.list_users().await?;
    Ok(Json(users.into_iter().map(UserGetDto::from).collect()))
}

/// Register a new user
///
/// The username and the name must both be unused. The account starts
/// OFFLINE with a fresh token.
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = UserPostRequest,
    responses(
        (status = 201, description = "User created", body = UserGetDto),
        (status = 409, description = "Username or name already taken", body = ApiResponse<String>)
    )
)]
pub async fn create_user(
    State(state): State<UserHandlerState>,
    Json(request): Json<UserPostRequest>,
) -> Result<(StatusCode, Json<UserGetDto>), ApiError> {
    let created = state.service.create_user(request.into()).await?;
    Ok((StatusCode::CREATED, Json(UserGetDto::from(created))))
}

/// Log in
///
/// Validates the username/name pair. Any attempt, successful or not,
/// first sets every user OFFLINE; on success the matched user goes
/// ONLINE with a fresh token.
#[utoipa::path(
    put,
    path = "/login",
    tag = "Users",
    request_body = UserPostRequest,
    responses(
        (status = 200, description = "Logged in", body = UserGetDto),
        (status = 404, description = "Unknown username", body = ApiResponse<String>),
        (status = 401, description = "Wrong credentials", body = ApiResponse<String>)
    )
)]
pub async fn login(
    State(state): State<UserHandlerState>,
    Json(request): Json<UserPostRequest>,
) -> Result<Json<UserGetDto>, ApiError> {
    let user = state.service.login(request.into()).await?;
    Ok(Json(UserGetDto::from(user)))
}

/// Fetch a user by id
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = i32, Path, description = "User identifier")
    ),
    responses(
        (status = 200, description = "Full profile", body = UserProfileDto),
        (status = 404, description = "Unknown id", body = ApiResponse<String>)
    )
)]
pub async fn get_user(
    State(state): State<UserHandlerState>,
    Path(user_id): Path<i32>,
) -> Result<Json<UserProfileDto>, ApiError> {
    let user = state.service.get_user(user_id).await?;
    Ok(Json(UserProfileDto::from(user)))
}

/// Edit a user's profile
///
/// Applies only the fields present in the body; absent fields stay
/// untouched.
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = i32, Path, description = "User identifier")
    ),
    request_body = UserUpdateRequest,
    responses(
        (status = 204, description = "Profile updated"),
        (status = 404, description = "Unknown id", body = ApiResponse<String>)
    )
)]
pub async fn update_user(
    State(state): State<UserHandlerState>,
    Path(user_id): Path<i32>,
    Json(request): Json<UserUpdateRequest>,
) -> Result<StatusCode, ApiError> {
    state.service.update_user(user_id, request.into()).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Log out
///
/// Sets the user OFFLINE. Idempotent for already-offline users.
#[utoipa::path(
    put,
    path = "/logout/{id}",
    tag = "Users",
    params(
        ("id" = i32, Path, description = "User identifier")
    ),
    responses(
        (status = 204, description = "Logged out"),
        (status = 404, description = "Unknown id", body = ApiResponse<String>)
    )
)]
pub async fn logout(
    State(state): State<UserHandlerState>,
    Path(user_id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    state.service.logout(user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
