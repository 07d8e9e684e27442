/// User resource endpoints
///
/// Each handler validates input shape, issues a single parameterized SQL
/// statement through the model layer, and returns either the record(s) or a
/// minimal acknowledgment.
///
/// # Endpoints
///
/// - `GET    /user/` - List all users
/// - `GET    /user/:user_id` - Get a user by ID
/// - `POST   /user/create` - Create a user (slug derived from username)
/// - `PUT    /user/update?user_id=` - Update firstname/lastname/age
/// - `DELETE /user/delete?user_id=` - Delete a user

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    routes::Ack,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use taskman_shared::models::user::{CreateUser, UpdateUser, User};

/// Target user selector for update/delete, passed as a query parameter
#[derive(Debug, Deserialize)]
pub struct UserIdQuery {
    /// ID of the user to operate on
    pub user_id: i64,
}

/// `GET /user/` - Returns all users
///
/// Always succeeds; an empty database yields an empty array.
pub async fn all_users(State(state): State<AppState>) -> ApiResult<Json<Vec<User>>> {
    let users = User::list(&state.db).await?;
    Ok(Json(users))
}

/// `GET /user/:user_id` - Returns the user matching the ID
///
/// # Errors
///
/// - `404 Not Found`: "User was not found"
pub async fn user_by_id(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> ApiResult<Json<User>> {
    let user = User::find_by_id(&state.db, user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User was not found".to_string()))?;

    Ok(Json(user))
}

/// `POST /user/create` - Creates a new user
///
/// The slug is derived from the submitted username inside the model layer.
/// No uniqueness check is performed on the username.
///
/// # Request
///
/// ```json
/// {
///   "username": "john-doe",
///   "firstname": "John",
///   "lastname": "Doe",
///   "age": 30
/// }
/// ```
///
/// # Response
///
/// `201 Created` with `{"status_code": 201, "transaction": "Successful"}`
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUser>,
) -> ApiResult<(StatusCode, Json<Ack>)> {
    let id = User::create(&state.db, payload).await?;
    tracing::debug!(user_id = id, "Created user");

    Ok((StatusCode::CREATED, Json(Ack::created())))
}

/// `PUT /user/update?user_id=` - Updates firstname, lastname and age
///
/// Username and slug are immutable. Existence is checked via the
/// affected-row count, not a pre-read.
///
/// # Errors
///
/// - `404 Not Found`: "User was not found" (no row matched)
pub async fn update_user(
    State(state): State<AppState>,
    Query(query): Query<UserIdQuery>,
    Json(payload): Json<UpdateUser>,
) -> ApiResult<Json<Ack>> {
    let affected = User::update(&state.db, query.user_id, payload).await?;
    if affected == 0 {
        return Err(ApiError::NotFound("User was not found".to_string()));
    }

    Ok(Json(Ack::ok("User update is successful!")))
}

/// `DELETE /user/delete?user_id=` - Deletes a user by ID
///
/// Tasks referencing the user are left in place.
///
/// # Errors
///
/// - `404 Not Found`: "User was not found" (no row matched)
pub async fn delete_user(
    State(state): State<AppState>,
    Query(query): Query<UserIdQuery>,
) -> ApiResult<Json<Ack>> {
    let affected = User::delete(&state.db, query.user_id).await?;
    if affected == 0 {
        return Err(ApiError::NotFound("User was not found".to_string()));
    }

    Ok(Json(Ack::ok("User deleted successfully!")))
}
