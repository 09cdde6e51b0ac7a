use anyhow::Result;
use floralbot::cli::{start, telemetry};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse arguments, set up logging and pick the action
    let action = start()?;

    let result = action.execute().await;

    telemetry::shutdown_tracer();

    result
}
