//! # FloralBot signup client
//!
//! `floralbot` is the client-side core of the FloralBot account flow: it turns
//! the signup form into an authenticated, locally persisted session.
//!
//! ## Signup & Session Bootstrap
//!
//! 1. **Validate:** Every field edit recomputes the age derived from the birth
//!    date and the form validity. Submission is refused while the form is invalid.
//! 2. **Register:** The client POSTs `{name, email, password}` to `/auth/register`.
//! 3. **Login:** Only after registration succeeds, the client POSTs
//!    `{email, password}` to `/auth/login` and receives `{token, userName, userEmail}`.
//! 4. **Persist:** The three session entries (`authToken`, `userName`,
//!    `userEmail`) are written in one operation, then the navigator is told that
//!    signup succeeded.
//!
//! A login failure after a successful registration writes nothing and tells the
//! user to sign in, because registering again would hit a duplicate account.

pub mod app;
pub mod cli;
pub mod navigation;
pub mod session;
pub mod signup;

pub static APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
