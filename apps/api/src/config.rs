use std::str::FromStr;

use anyhow::{Context, Result};

use crate::filter::salary::BucketUnits;

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    /// Job listing endpoint, queried as `GET {jobs_api_url}?keyword=...`.
    pub jobs_api_url: String,
    pub port: u16,
    pub rust_log: String,
    /// Origin allowed by the CORS layer (the browser UI).
    pub frontend_url: String,
    pub initial_keyword: String,
    pub fetch_timeout_secs: u64,
    pub salary_bucket_units: BucketUnits,
    /// Jump back to page 1 whenever a facet value is toggled.
    pub reset_page_on_filter: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            jobs_api_url: require_env("JOBS_API_URL")?,
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            frontend_url: std::env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            initial_keyword: std::env::var("INITIAL_KEYWORD").unwrap_or_default(),
            fetch_timeout_secs: parse_env("JOBS_FETCH_TIMEOUT_SECS", 30)?,
            salary_bucket_units: parse_env("SALARY_BUCKET_UNITS", BucketUnits::Scaled)?,
            reset_page_on_filter: parse_env("RESET_PAGE_ON_FILTER", false)?,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value '{raw}'")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
impl Config {
    /// Configuration used by handler tests; never reads the environment.
    pub fn for_tests() -> Self {
        Config {
            jobs_api_url: "http://jobs.test/api/v1/job/get".to_string(),
            port: 0,
            rust_log: "debug".to_string(),
            frontend_url: "http://localhost:5173".to_string(),
            initial_keyword: String::new(),
            fetch_timeout_secs: 5,
            salary_bucket_units: BucketUnits::Scaled,
            reset_page_on_filter: false,
        }
    }
}
