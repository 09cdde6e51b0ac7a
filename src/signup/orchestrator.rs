//! Turns a valid signup form into a persisted session.
//!
//! A submission runs an ordered list of fallible steps (register, login,
//! persist) and stops at the first failure. Whatever happens, the attempt
//! leaves `Submitting` and its outcome lands in a single message slot.

use super::{
    client,
    form::{Credentials, SignupForm},
};
use crate::{
    app::{ApiClient, AppConfig, AppError},
    navigation::{Navigator, Page, SurfaceHandle},
    session::{Session, SessionStore},
};
use secrecy::SecretString;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, instrument, warn};
use ulid::Ulid;

pub const REGISTRATION_FAILED: &str = "Account creation failed.";
pub const LOGIN_FAILED: &str =
    "Your account was created, but automatic login failed. Please sign in instead of registering again.";
pub const SESSION_NOT_SAVED: &str =
    "Your account was created, but the session could not be saved. Please sign in instead of registering again.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitState {
    Idle,
    Submitting,
    Success,
    Failed(String),
}

impl SubmitState {
    /// Whether the submit action should be enabled.
    #[must_use]
    pub const fn can_submit(&self) -> bool {
        !matches!(self, Self::Submitting)
    }

    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            Self::Idle | Self::Submitting | Self::Success => None,
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Step {
    Register,
    Login,
    Persist,
}

const STEPS: [Step; 3] = [Step::Register, Step::Login, Step::Persist];

/// Data owned by one submission attempt.
struct Attempt {
    name: String,
    credentials: Credentials,
    session: Option<Session>,
}

pub struct SignupOrchestrator {
    config: AppConfig,
    store: Arc<dyn SessionStore>,
    navigator: Arc<dyn Navigator>,
    surface: SurfaceHandle,
    state: Mutex<SubmitState>,
}

impl SignupOrchestrator {
    #[must_use]
    pub fn new(
        config: AppConfig,
        store: Arc<dyn SessionStore>,
        navigator: Arc<dyn Navigator>,
        surface: SurfaceHandle,
    ) -> Self {
        Self {
            config,
            store,
            navigator,
            surface,
            state: Mutex::new(SubmitState::Idle),
        }
    }

    #[must_use]
    pub fn state(&self) -> SubmitState {
        self.lock_state().clone()
    }

    /// Forwards a navigation request unless the surface is gone.
    pub fn navigate(&self, page: Page) {
        if self.surface.is_mounted() {
            self.navigator.navigate(page);
        }
    }

    /// Runs one signup attempt.
    ///
    /// An invalid form is rejected without touching the state, and so is a
    /// second submission while one is in flight.
    ///
    /// # Errors
    /// Returns the error that ended the attempt; its `user_message` is also
    /// stored in `SubmitState::Failed`.
    #[instrument(skip_all, fields(attempt = %Ulid::new()))]
    pub async fn submit(&self, form: &SignupForm) -> Result<Session, AppError> {
        form.validate()?;
        self.begin()?;

        let result = self.run(form).await;
        self.finish(&result);
        result
    }

    fn begin(&self) -> Result<(), AppError> {
        let mut state = self.lock_state();
        if *state == SubmitState::Submitting {
            warn!("submission rejected, another one is in flight");
            return Err(AppError::Busy);
        }
        *state = SubmitState::Submitting;
        Ok(())
    }

    async fn run(&self, form: &SignupForm) -> Result<Session, AppError> {
        // Fails fast on a missing or placeholder endpoint, before any request.
        let api = ApiClient::from_config(&self.config)?;

        let mut attempt = Attempt {
            name: form.name().trim().to_string(),
            credentials: form.credentials(),
            session: None,
        };

        for step in STEPS {
            debug!(?step, "running signup step");
            self.run_step(step, &api, &mut attempt).await?;
        }

        attempt
            .session
            .ok_or_else(|| AppError::LoginAfterRegistration(LOGIN_FAILED.to_string()))
    }

    async fn run_step(
        &self,
        step: Step,
        api: &ApiClient,
        attempt: &mut Attempt,
    ) -> Result<(), AppError> {
        match step {
            Step::Register => client::register(api, &attempt.name, &attempt.credentials)
                .await
                .map_err(registration_error),
            Step::Login => {
                let response = client::login(api, &attempt.credentials)
                    .await
                    .map_err(login_error)?;
                attempt.session = Some(Session {
                    auth_token: SecretString::from(response.token),
                    user_name: response.user_name,
                    user_email: response.user_email,
                });
                Ok(())
            }
            Step::Persist => {
                let session = attempt
                    .session
                    .as_ref()
                    .ok_or_else(|| AppError::LoginAfterRegistration(LOGIN_FAILED.to_string()))?;
                self.store.save(session).map_err(|err| {
                    warn!("failed to persist session: {err}");
                    AppError::LoginAfterRegistration(SESSION_NOT_SAVED.to_string())
                })
            }
        }
    }

    fn finish(&self, result: &Result<Session, AppError>) {
        let next = match result {
            Ok(_) => SubmitState::Success,
            Err(err) => SubmitState::Failed(err.user_message()),
        };
        *self.lock_state() = next;

        if !self.surface.is_mounted() {
            debug!("surface torn down, dropping signup outcome");
            return;
        }

        match result {
            Ok(session) => {
                info!(user = %session.user_email, "signup completed");
                self.navigator.signup_succeeded();
            }
            Err(err) => info!("signup failed: {err}"),
        }
    }

    // A poisoned lock still holds a usable state; never leave it stuck in Submitting.
    fn lock_state(&self) -> MutexGuard<'_, SubmitState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn registration_error(err: AppError) -> AppError {
    match err {
        AppError::Http { message, .. } => {
            AppError::Registration(message.unwrap_or_else(|| REGISTRATION_FAILED.to_string()))
        }
        other => other,
    }
}

// The account exists at this point, so every login failure says so.
fn login_error(err: AppError) -> AppError {
    // Transport failures get a neutral detail, never "try again".
    let detail = match err {
        AppError::Http { message, .. } => message,
        AppError::Timeout(_) => Some("the login request timed out".to_string()),
        AppError::Network(_) => Some("the server could not be reached".to_string()),
        _ => None,
    };

    AppError::LoginAfterRegistration(match detail {
        Some(detail) => format!("{LOGIN_FAILED} ({detail})"),
        None => LOGIN_FAILED.to_string(),
    })
}
