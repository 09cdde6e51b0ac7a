use crate::app::config::{AppConfig, ConfigOverrides};
use crate::cli::commands::{ARG_API_URL, ARG_SESSION_FILE, ARG_TIMEOUT_MS};

/// Options shared by every subcommand.
#[derive(Debug, Clone, Default)]
pub struct GlobalArgs {
    pub api_url: Option<String>,
    pub session_file: Option<String>,
    pub timeout_ms: Option<u64>,
}

impl GlobalArgs {
    #[must_use]
    pub fn parse(matches: &clap::ArgMatches) -> Self {
        Self {
            api_url: matches.get_one::<String>(ARG_API_URL).cloned(),
            session_file: matches.get_one::<String>(ARG_SESSION_FILE).cloned(),
            timeout_ms: matches.get_one::<u64>(ARG_TIMEOUT_MS).copied(),
        }
    }

    /// Defaults overridden by whatever was given on the command line or in the environment.
    #[must_use]
    pub fn config(&self) -> AppConfig {
        let mut config = AppConfig::default();
        config.apply_overrides(ConfigOverrides {
            api_base_url: self.api_url.clone(),
            session_file: self.session_file.clone(),
            timeout_ms: self.timeout_ms,
        });
        config
    }
}
