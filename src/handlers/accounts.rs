//! Account management HTTP handlers.
//!
//! This module implements the account-related API endpoints:
//! - GET /accounts - List all accounts
//! - GET /accounts/{id} - Get account by ID
//! - POST /accounts - Create new account
//! - PUT /accounts/{id} - Update some or all fields of an account
//! - DELETE /accounts/{id} - Delete an account

use crate::{
    error::AppError,
    models::account::{Account, AccountPayload},
    state::AppState,
};
use axum::{
    Json,
    body::Bytes,
    extract::{Path, State, rejection::PathRejection},
    http::{StatusCode, header::LOCATION},
    response::IntoResponse,
};

/// Resolve the `{id}` path segment.
///
/// A segment that is not an integer cannot name an account, so it answers
/// 404 like any other unknown id.
fn account_id(path: Result<Path<i64>, PathRejection>) -> Result<i64, AppError> {
    let Path(id) = path.map_err(|_| AppError::AccountNotFound)?;
    Ok(id)
}

/// List all accounts.
///
/// # Response
///
/// - **Success (200 OK)**: Array of accounts ordered by id (may be empty)
///
/// ```json
/// [
///   {
///     "id": 1,
///     "name": "Ann",
///     "email": "a@x.com",
///     "address": "1 Rd",
///     "phone_number": "555"
///   }
/// ]
/// ```
pub async fn list_accounts(
    State(state): State<AppState>,
) -> Result<Json<Vec<Account>>, AppError> {
    let accounts = state.store.list().await?;

    Ok(Json(accounts))
}

/// Get a specific account by ID.
///
/// # Response
///
/// - **Success (200 OK)**: Returns the account
/// - **Error (404)**: No account with this id
pub async fn get_account(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Account>, AppError> {
    let id = account_id(path)?;

    let account = state
        .store
        .get(id)
        .await?
        .ok_or(AppError::AccountNotFound)?;

    Ok(Json(account))
}

/// Create a new account.
///
/// # Request Body
///
/// ```json
/// {
///   "name": "Ann",
///   "email": "a@x.com",
///   "address": "1 Rd",
///   "phone_number": "555"
/// }
/// ```
///
/// Missing fields are stored as empty strings; an `id` in the body is ignored.
/// A body that sets none of the four fields (e.g. `{}`) is rejected.
///
/// # Response
///
/// - **Success (201 Created)**: Returns the created account with
///   `Location: /accounts/{id}`
/// - **Error (400)**: Body missing, empty, not JSON, or wrong field types
/// - **Error (415)**: Content-Type is not application/json (see middleware)
pub async fn create_account(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let payload = AccountPayload::from_slice(&body)?;

    // An object with no account fields is as good as no body
    let account = state.store.insert(payload.into_new_account()?).await?;
    tracing::info!("Account with id [{}] created", account.id);

    let location = format!("/accounts/{}", account.id);

    Ok((StatusCode::CREATED, [(LOCATION, location)], Json(account)))
}

/// Update an existing account.
///
/// Fields present in the body overwrite the stored value; omitted fields are
/// kept (partial update). The merge happens inside the store, so concurrent
/// partial updates of different fields do not overwrite each other. An empty
/// object is a no-op.
///
/// # Response
///
/// - **Success (200 OK)**: Returns the merged account
/// - **Error (404)**: No account with this id
/// - **Error (400)**: Body missing, not JSON, or wrong field types
/// - **Error (415)**: Content-Type is not application/json (see middleware)
pub async fn update_account(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    body: Bytes,
) -> Result<Json<Account>, AppError> {
    let id = account_id(path)?;

    // Unknown ids answer 404 before the body is looked at
    if state.store.get(id).await?.is_none() {
        return Err(AppError::AccountNotFound);
    }

    let payload = AccountPayload::from_slice(&body)?;

    // Row may have been deleted since the lookup
    let updated = state
        .store
        .update(id, &payload)
        .await?
        .ok_or(AppError::AccountNotFound)?;

    Ok(Json(updated))
}

/// Delete an account.
///
/// # Response
///
/// Returns 204 No Content whether or not the account existed. A non-integer
/// id is an unknown route and answers 404.
pub async fn delete_account(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let id = account_id(path)?;

    // Absent ids are a no-op
    state.store.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
