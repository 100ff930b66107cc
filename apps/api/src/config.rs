use std::time::Duration;

use anyhow::{bail, Context, Result};

use crate::quiz::machine::FlowConfig;

/// Application configuration loaded from environment variables.
/// Fails at startup if a value is present but malformed.
#[derive(Debug, Clone)]
pub struct Config {
    /// Without a key the insights gateway runs offline and every session
    /// uses fallback content.
    pub gemini_api_key: Option<String>,
    pub insights_timeout: Duration,
    pub port: u16,
    pub rust_log: String,
    pub flow: FlowConfig,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = FlowConfig::default();

        Ok(Config {
            gemini_api_key: optional_env("GEMINI_API_KEY"),
            insights_timeout: Duration::from_secs(
                std::env::var("INSIGHTS_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "30".to_string())
                    .parse::<u64>()
                    .context("INSIGHTS_TIMEOUT_SECS must be a whole number of seconds")?,
            ),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            flow: FlowConfig {
                user_details: flag_env("FLOW_USER_DETAILS", defaults.user_details)?,
                profession_overview: flag_env(
                    "FLOW_PROFESSION_OVERVIEW",
                    defaults.profession_overview,
                )?,
                task_page: flag_env("FLOW_TASK_PAGE", defaults.task_page)?,
                loading_results: flag_env("FLOW_LOADING_RESULTS", defaults.loading_results)?,
            },
        })
    }
}

/// Unset and blank values are treated the same.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn flag_env(key: &str, default: bool) -> Result<bool> {
    match optional_env(key) {
        Some(raw) => parse_flag(&raw).with_context(|| format!("'{key}' must be a boolean")),
        None => Ok(default),
    }
}

fn parse_flag(raw: &str) -> Result<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("unrecognised flag value '{other}'"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag_accepts_common_spellings() {
        assert!(parse_flag("TRUE").unwrap());
        assert!(parse_flag("on").unwrap());
        assert!(!parse_flag("0").unwrap());
        assert!(!parse_flag("No").unwrap());
    }

    #[test]
    fn test_parse_flag_rejects_garbage() {
        assert!(parse_flag("maybe").is_err());
        assert!(parse_flag("").is_err());
    }

    #[test]
    fn test_flag_env_falls_back_to_default() {
        assert!(flag_env("COMPASS_TEST_UNSET_FLAG", true).unwrap());
        assert!(!flag_env("COMPASS_TEST_UNSET_FLAG", false).unwrap());
    }
}
