//! Log level selection. Each `-v` raises the level one step above ERROR;
//! `FLORALBOT_LOG_LEVEL` takes a level name instead of a count.

use clap::{builder::ValueParser, Arg, ArgAction, Command};
use tracing::Level;

pub const ARG_VERBOSITY: &str = "verbosity";
pub const ENV_LOG_LEVEL: &str = "FLORALBOT_LOG_LEVEL";

/// Levels in `-v` order; index 0 is the default.
const LEVELS: [Level; 5] = [
    Level::ERROR,
    Level::WARN,
    Level::INFO,
    Level::DEBUG,
    Level::TRACE,
];

/// Maps a level name from the environment to its `-v` count.
fn parse_level_name(name: &str) -> Result<u8, String> {
    let wanted = name.trim();
    LEVELS
        .iter()
        .position(|level| level.to_string().eq_ignore_ascii_case(wanted))
        .and_then(|index| u8::try_from(index).ok())
        .ok_or_else(|| {
            format!("invalid log level '{name}', expected one of: error, warn, info, debug, trace")
        })
}

/// Tracing level for a `-v` count; counts past TRACE saturate.
#[must_use]
pub fn level_for(verbosity: u8) -> Level {
    LEVELS[usize::from(verbosity).min(LEVELS.len() - 1)]
}

#[must_use]
pub fn with_args(command: Command) -> Command {
    command.arg(
        Arg::new(ARG_VERBOSITY)
            .short('v')
            .long("verbose")
            .help("Raise log verbosity: -v WARN, -vv INFO, -vvv DEBUG, -vvvv TRACE (default: ERROR)")
            .env(ENV_LOG_LEVEL)
            .global(true)
            .action(ArgAction::Count)
            .value_parser(ValueParser::from(parse_level_name)),
    )
}
