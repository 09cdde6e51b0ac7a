//! Client wrappers for the auth API endpoints used during signup.

use super::{
    form::Credentials,
    types::{LoginRequest, LoginResponse, RegisterRequest},
};
use crate::app::{ApiClient, AppError};
use secrecy::ExposeSecret;

pub const REGISTER_PATH: &str = "/auth/register";
pub const LOGIN_PATH: &str = "/auth/login";

/// Creates an account. Only name, email and password are sent.
///
/// # Errors
/// Returns `AppError::Http` when the server rejects the account, or a
/// transport error.
pub async fn register(api: &ApiClient, name: &str, credentials: &Credentials) -> Result<(), AppError> {
    let request = RegisterRequest {
        name,
        email: &credentials.email,
        password: credentials.password.expose_secret(),
    };
    api.post_json(REGISTER_PATH, &request).await
}

/// Authenticates and returns the session fields.
///
/// # Errors
/// Returns `AppError::Http` when the server rejects the login, `AppError::Parse`
/// when the success body is missing fields, or a transport error.
pub async fn login(api: &ApiClient, credentials: &Credentials) -> Result<LoginResponse, AppError> {
    let request = LoginRequest {
        email: &credentials.email,
        password: credentials.password.expose_secret(),
    };
    api.post_json_response(LOGIN_PATH, &request).await
}
