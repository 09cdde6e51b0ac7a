use super::{age, session, signup, Action};
use anyhow::Result;

pub(super) async fn execute(action: Action) -> Result<()> {
    match action {
        Action::Signup(args) => signup::execute(args).await,
        Action::Age(args) => {
            age::execute(&args);
            Ok(())
        }
        Action::Session(args) => session::execute(&args),
    }
}
