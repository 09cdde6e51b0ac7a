//! Shared client utilities for API access, configuration and errors.
//!
//! Centralizing these helpers keeps network behavior consistent and avoids
//! duplicated request setup in the signup feature. These utilities see
//! passwords in request bodies, so callers must never log payloads.

pub mod api;
pub mod config;
pub mod errors;

pub use api::ApiClient;
pub use config::AppConfig;
pub use errors::AppError;
