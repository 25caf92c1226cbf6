use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::AppError;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// How the result container is written to stdout
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Html,
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub base_url: String,
    pub session_cookie: Option<String>,
    pub timeout: Option<Duration>,
    pub output: OutputFormat,
    pub ics_path: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from any key lookup; `from_env` passes the process environment
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let base_url = normalize_base_url(
            &get("STUDY_PLANNER_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        )?;

        let session_cookie = get("STUDY_PLANNER_SESSION_COOKIE");

        let timeout = match get("STUDY_PLANNER_TIMEOUT_SECS") {
            Some(raw) => Some(parse_timeout(&raw)?),
            None => None,
        };

        let output = match get("STUDY_PLANNER_OUTPUT").as_deref() {
            None => OutputFormat::Text,
            Some(raw) => parse_output(raw)?,
        };

        let ics_path = get("STUDY_PLANNER_ICS_PATH").map(PathBuf::from);

        Ok(Self {
            base_url,
            session_cookie,
            timeout,
            output,
            ics_path,
        })
    }
}

fn normalize_base_url(raw: &str) -> Result<String, AppError> {
    let trimmed = raw.trim();
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(AppError::Config(format!(
            "STUDY_PLANNER_URL must start with http:// or https://, got {}",
            trimmed
        )));
    }

    Ok(trimmed.trim_end_matches('/').to_string())
}

fn parse_timeout(raw: &str) -> Result<Duration, AppError> {
    let secs: u64 = raw.trim().parse().map_err(|_| {
        AppError::Config(format!("STUDY_PLANNER_TIMEOUT_SECS must be an integer, got {}", raw))
    })?;

    if secs == 0 {
        return Err(AppError::Config(
            "STUDY_PLANNER_TIMEOUT_SECS must be greater than zero".to_string(),
        ));
    }

    Ok(Duration::from_secs(secs))
}

fn parse_output(raw: &str) -> Result<OutputFormat, AppError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "text" => Ok(OutputFormat::Text),
        "html" => Ok(OutputFormat::Html),
        other => Err(AppError::Config(format!(
            "STUDY_PLANNER_OUTPUT must be `text` or `html`, got {}",
            other
        ))),
    }
}
