use std::path::PathBuf;
use std::time::Duration;

use crate::error::ConfigError;

/// Default answers file read by the wizard binary.
pub const DEFAULT_ANSWERS_FILE: &str = "answers.json";

/// Default HTTP request timeout in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Portal client configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL the `/api/...` paths are joined to.
    pub api_url: String,
    /// Credential from the auth store, sent as the Basic auth username.
    pub token: String,
    /// Role string from the auth store. Parsed by the session, so an
    /// unknown role is not a config error.
    pub role: String,
    pub answers_file: PathBuf,
    /// Pause after each successful submission before advancing.
    pub submit_delay: Duration,
    pub request_timeout: Duration,
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env Var                  | Default        |
    /// |--------------------------|----------------|
    /// | `PORTAL_API_URL`         | required       |
    /// | `PORTAL_TOKEN`           | required       |
    /// | `PORTAL_ROLE`            | required       |
    /// | `PORTAL_ANSWERS_FILE`    | `answers.json` |
    /// | `PORTAL_SUBMIT_DELAY_MS` | `0`            |
    /// | `REQUEST_TIMEOUT_SECS`   | `30`           |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |name: &'static str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::Missing(name))
        };

        let api_url = required("PORTAL_API_URL")?.trim_end_matches('/').to_string();
        let token = required("PORTAL_TOKEN")?;
        let role = required("PORTAL_ROLE")?;

        let answers_file = lookup("PORTAL_ANSWERS_FILE")
            .unwrap_or_else(|| DEFAULT_ANSWERS_FILE.into())
            .into();

        let submit_delay_ms = parse_u64(&lookup, "PORTAL_SUBMIT_DELAY_MS", 0)?;
        let request_timeout_secs =
            parse_u64(&lookup, "REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS)?;

        Ok(Self {
            api_url,
            token,
            role,
            answers_file,
            submit_delay: Duration::from_millis(submit_delay_ms),
            request_timeout: Duration::from_secs(request_timeout_secs),
        })
    }
}

fn parse_u64(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: u64,
) -> Result<u64, ConfigError> {
    match lookup(name) {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid {
            name,
            expected: "a non-negative integer",
            value,
        }),
    }
}
