use crate::cli::globals::GlobalArgs;
use crate::session::{FileSessionStore, SessionStore};
use anyhow::{Context, Result};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Show,
    Logout,
}

#[derive(Debug)]
pub struct Args {
    pub globals: GlobalArgs,
    pub command: Command,
}

/// Show or clear the stored session. The token itself is never printed.
/// # Errors
/// Returns an error if the session file cannot be read or written.
pub fn execute(args: &Args) -> Result<()> {
    let config = args.globals.config();
    let store = FileSessionStore::new(&config.session_file);
    debug!(path = %store.path().display(), "using session file");

    match args.command {
        Command::Show => {
            let session = store.load().context("Could not read the session")?;
            match session {
                Some(session) => {
                    println!("Signed in as {} <{}>", session.user_name, session.user_email);
                }
                None => println!("Not signed in"),
            }
        }
        Command::Logout => {
            store.clear().context("Could not clear the session")?;
            println!("Signed out");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Session;
    use secrecy::SecretString;
    use tempfile::TempDir;

    #[test]
    fn logout_clears_stored_session() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");
        let store = FileSessionStore::new(&path);
        store
            .save(&Session {
                auth_token: SecretString::from("tok"),
                user_name: "Maria".to_string(),
                user_email: "maria@example.com".to_string(),
            })
            .unwrap();

        let args = Args {
            globals: GlobalArgs {
                session_file: Some(path.display().to_string()),
                ..GlobalArgs::default()
            },
            command: Command::Logout,
        };
        execute(&args).unwrap();

        assert!(!store.is_authenticated().unwrap());
    }
}
