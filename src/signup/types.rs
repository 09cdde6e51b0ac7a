//! Request and response types for the auth API. Request bodies carry the
//! password and the login response carries the bearer token, so these values
//! must never be logged.

use serde::{Deserialize, Serialize};

/// Registration payload. Birth date and gender are collected by the form but
/// the registration endpoint only accepts these three fields.
#[derive(Serialize)]
pub struct RegisterRequest<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub user_name: String,
    pub user_email: String,
}
