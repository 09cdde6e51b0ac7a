//! Signup feature: field validation, the auth API client and the
//! register-then-login orchestration. Request bodies and the login response
//! carry a password and a bearer token, so nothing here logs payloads.
//!
//! Flow Overview: the surface edits a `SignupForm` field by field, which keeps
//! the derived age and validity current. On submit the orchestrator registers
//! the account, logs in with the same credentials, persists the session and
//! then tells the navigator that signup succeeded.

pub mod age;
pub mod client;
pub mod form;
pub mod orchestrator;
pub mod types;

pub use age::{derive_age, DerivedAge};
pub use form::{Credentials, Gender, SignupForm};
pub use orchestrator::{SignupOrchestrator, SubmitState};
