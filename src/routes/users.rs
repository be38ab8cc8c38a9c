use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};

use crate::{
    dto::user_dto::CreateUserPayload,
    error::{Error, Result},
    services::user_service::CREATE_USER_ERROR,
    AppState,
};

#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "List of users", body = [User]),
        (status = 500, description = "Error fetching users")
    )
)]
#[axum::debug_handler]
pub async fn list_users(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let users = state.user_service.list().await?;
    Ok(Json(users))
}

#[utoipa::path(
    post,
    path = "/users",
    request_body = CreateUserPayload,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 500, description = "Error creating user")
    )
)]
#[axum::debug_handler]
pub async fn create_user(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CreateUserPayload>, JsonRejection>,
) -> Result<impl IntoResponse> {
    // An unreadable body fails like a rejected insert.
    let Json(payload) = payload.map_err(|rejection| {
        tracing::error!(error = %rejection.body_text(), "{}", CREATE_USER_ERROR);
        Error::Internal(CREATE_USER_ERROR.to_string())
    })?;
    let user = state.user_service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(user)))
}
