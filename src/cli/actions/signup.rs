use crate::{
    app::AppError,
    cli::globals::GlobalArgs,
    navigation::{Navigator, Page, SurfaceHandle},
    session::FileSessionStore,
    signup::{Gender, SignupForm, SignupOrchestrator},
};
use anyhow::{anyhow, Result};
use secrecy::SecretString;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug)]
pub struct Args {
    pub globals: GlobalArgs,
    pub name: String,
    pub date_of_birth: String,
    pub gender: Option<Gender>,
    pub email: String,
    pub password: SecretString,
}

/// Prints page transitions; the terminal is the only surface.
struct TerminalNavigator;

impl Navigator for TerminalNavigator {
    fn signup_succeeded(&self) {
        println!("Account created. You are signed in.");
    }

    fn navigate(&self, page: Page) {
        debug!(%page, "navigate");
        if page == Page::Login {
            println!("Next: sign in on the login page with the same email and password.");
        } else {
            println!("Next: {page}");
        }
    }
}

fn build_form(args: Args) -> SignupForm {
    let mut form = SignupForm::new();
    form.set_name(args.name);
    form.set_date_of_birth(args.date_of_birth);
    form.set_gender(args.gender);
    form.set_email(args.email);
    form.set_password(args.password);
    form
}

/// Validate the form and run the signup flow.
/// # Errors
/// Returns the user-facing failure message if the form is invalid or signup fails.
pub async fn execute(args: Args) -> Result<()> {
    let config = args.globals.config();
    let form = build_form(args);

    println!("Age: {}", super::age::render(form.derived_age()));
    form.validate().map_err(|err| anyhow!(err.user_message()))?;

    let orchestrator = SignupOrchestrator::new(
        config.clone(),
        Arc::new(FileSessionStore::new(&config.session_file)),
        Arc::new(TerminalNavigator),
        SurfaceHandle::new(),
    );

    match orchestrator.submit(&form).await {
        Ok(_) => Ok(()),
        Err(err) => {
            if matches!(err, AppError::LoginAfterRegistration(_)) {
                orchestrator.navigate(Page::Login);
            }
            Err(anyhow!(err.user_message()))
        }
    }
}
