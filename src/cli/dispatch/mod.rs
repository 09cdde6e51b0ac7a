//! Command-line argument dispatch.
//!
//! This module maps validated CLI matches to the action the binary executes.

use crate::cli::actions::{age, session, signup, Action};
use crate::cli::commands::{
    ARG_DATE_OF_BIRTH, ARG_EMAIL, ARG_GENDER, ARG_NAME, ARG_PASSWORD,
};
use crate::cli::globals::GlobalArgs;
use crate::signup::Gender;
use anyhow::{anyhow, Result};
use secrecy::SecretString;

fn string_arg(matches: &clap::ArgMatches, id: &str) -> String {
    matches.get_one::<String>(id).cloned().unwrap_or_default()
}

/// Map validated CLI matches to an action.
///
/// # Errors
/// Returns an error if no known subcommand was given.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let globals = GlobalArgs::parse(matches);

    match matches.subcommand() {
        Some(("signup", sub_m)) => Ok(Action::Signup(signup::Args {
            globals,
            name: string_arg(sub_m, ARG_NAME),
            date_of_birth: string_arg(sub_m, ARG_DATE_OF_BIRTH),
            gender: sub_m.get_one::<Gender>(ARG_GENDER).copied(),
            email: string_arg(sub_m, ARG_EMAIL),
            password: SecretString::from(string_arg(sub_m, ARG_PASSWORD)),
        })),
        Some(("age", sub_m)) => Ok(Action::Age(age::Args {
            date_of_birth: string_arg(sub_m, ARG_DATE_OF_BIRTH),
        })),
        Some(("session", sub_m)) => {
            let command = match sub_m.subcommand_name() {
                Some("show") => session::Command::Show,
                Some("logout") => session::Command::Logout,
                other => return Err(anyhow!("unknown session command: {other:?}")),
            };
            Ok(Action::Session(session::Args { globals, command }))
        }
        other => Err(anyhow!("unknown command: {:?}", other.map(|(name, _)| name))),
    }
}
