pub mod age;
pub mod session;
pub mod signup;

// The match over actions lives in `run` so this module stays small.
mod run;

#[derive(Debug)]
pub enum Action {
    Signup(signup::Args),
    Age(age::Args),
    Session(session::Args),
}

impl Action {
    /// Execute the action.
    /// # Errors
    /// Returns an error if the action fails.
    pub async fn execute(self) -> anyhow::Result<()> {
        run::execute(self).await
    }
}
