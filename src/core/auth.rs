//! Admin session management.
//!
//! The session is a bearer token plus the admin profile, both persisted in
//! localStorage so a reload stays logged in. The cache core only ever reads
//! the token (through [`crate::core::api::auth_token`]); this module owns
//! its lifecycle.

use serde::Deserialize;

use crate::config::{ADMIN_USER_KEY, TOKEN_KEY};
use crate::core::api;
use crate::core::error::AuthError;
use crate::models::AdminUser;
use crate::utils::dom;

#[derive(Deserialize)]
struct LoginPayload {
    token: String,
    admin: AdminUser,
}

#[derive(serde::Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

/// True iff a bearer token is stored.
pub fn is_logged_in() -> bool {
    api::auth_token().is_some()
}

/// The persisted admin profile, if any.
pub fn current_admin() -> Option<AdminUser> {
    let storage = dom::local_storage()?;
    let json = storage.get_item(ADMIN_USER_KEY).ok()??;
    serde_json::from_str(&json).ok()
}

/// Authenticate against `POST /admin/login` and persist the session.
pub async fn login(email: &str, password: &str) -> Result<AdminUser, AuthError> {
    let body = api::post("/admin/login", &LoginRequest { email, password }).await?;
    let payload: LoginPayload = api::decode(body).map_err(AuthError::from)?;

    let storage = dom::local_storage().ok_or(AuthError::StorageUnavailable)?;
    storage
        .set_item(TOKEN_KEY, &payload.token)
        .map_err(|_| AuthError::SaveFailed)?;
    let admin_json =
        serde_json::to_string(&payload.admin).map_err(|_| AuthError::SaveFailed)?;
    storage
        .set_item(ADMIN_USER_KEY, &admin_json)
        .map_err(|_| AuthError::SaveFailed)?;

    Ok(payload.admin)
}

/// Drop the persisted session. The caller is responsible for clearing the
/// session freshness tracker and navigating to the login route.
pub fn logout() {
    if let Some(storage) = dom::local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(ADMIN_USER_KEY);
    }
}
