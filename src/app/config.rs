//! Client configuration for the auth API endpoint, the session file and the
//! request timeout. The command line fills it from flags or their
//! `FLORALBOT_*` environment fallbacks. Configuration values are public; do not
//! store secrets here.

use super::errors::AppError;
use std::path::PathBuf;
use url::Url;

/// Base URL shipped as a placeholder; it must be replaced before signing up.
pub const PLACEHOLDER_API_BASE_URL: &str = "http://your-api-host.example";
/// Marker that identifies the placeholder even when a path or port was added.
const PLACEHOLDER_MARKER: &str = "your-api-host";
/// Default session file, relative to the working directory.
pub const DEFAULT_SESSION_FILE: &str = ".floralbot/session.json";
/// Default request timeout (milliseconds) applied to every network step.
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

pub const ENV_API_BASE_URL: &str = "FLORALBOT_API_BASE_URL";
pub const ENV_SESSION_FILE: &str = "FLORALBOT_SESSION_FILE";
pub const ENV_TIMEOUT_MS: &str = "FLORALBOT_TIMEOUT_MS";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub session_file: PathBuf,
    pub timeout_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: PLACEHOLDER_API_BASE_URL.to_string(),
            session_file: PathBuf::from(DEFAULT_SESSION_FILE),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

/// Optional values that replace the defaults when present.
#[derive(Clone, Debug, Default)]
pub struct ConfigOverrides {
    pub api_base_url: Option<String>,
    pub session_file: Option<String>,
    pub timeout_ms: Option<u64>,
}

impl AppConfig {
    /// Applies overrides, ignoring blank strings and a zero timeout.
    pub fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(value) = overrides.api_base_url.as_deref().and_then(normalize_value) {
            self.api_base_url = value;
        }
        if let Some(value) = overrides.session_file.as_deref().and_then(normalize_value) {
            self.session_file = PathBuf::from(value);
        }
        if let Some(value) = overrides.timeout_ms.filter(|ms| *ms > 0) {
            self.timeout_ms = value;
        }
    }

    /// Returns true when the base URL is still empty or the shipped placeholder.
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        let base = self.api_base_url.trim();
        base.is_empty() || base.contains(PLACEHOLDER_MARKER)
    }

    /// Returns the configured API base URL, failing fast when it was never set.
    ///
    /// # Errors
    /// Returns `AppError::Config` when the URL is missing, the placeholder, or
    /// not an absolute http(s) URL.
    pub fn api_base(&self) -> Result<Url, AppError> {
        if self.is_placeholder() {
            return Err(AppError::Config(
                "The API URL is not configured. Set FLORALBOT_API_BASE_URL or pass --api-url."
                    .to_string(),
            ));
        }

        let url = Url::parse(self.api_base_url.trim()).map_err(|err| {
            AppError::Config(format!("The API URL is not a valid URL: {err}"))
        })?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            scheme => Err(AppError::Config(format!(
                "The API URL uses an unsupported scheme: {scheme}"
            ))),
        }
    }
}

fn normalize_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
