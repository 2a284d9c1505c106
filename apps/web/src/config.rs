use anyhow::{Context, Result};

const DEFAULT_JOBS_SOURCE: &str = "data/jobs.json";

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed numeric values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// File path or http(s) URL of the job data document.
    pub jobs_source: String,
    pub port: u16,
    pub rust_log: String,
    pub fetch_timeout_secs: u64,
    /// Options for the company selector. Supplied by the deployment, never derived from the data.
    pub company_options: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            jobs_source: std::env::var("JOBS_SOURCE")
                .unwrap_or_else(|_| DEFAULT_JOBS_SOURCE.to_string()),
            port: parse_port(&std::env::var("PORT").unwrap_or_else(|_| "8080".to_string()))?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            fetch_timeout_secs: parse_timeout_secs(
                &std::env::var("FETCH_TIMEOUT_SECS").unwrap_or_else(|_| "30".to_string()),
            )?,
            company_options: parse_company_options(
                &std::env::var("COMPANY_OPTIONS").unwrap_or_default(),
            ),
        })
    }
}

fn parse_port(raw: &str) -> Result<u16> {
    raw.trim()
        .parse::<u16>()
        .with_context(|| format!("PORT must be a valid port number, got '{raw}'"))
}

fn parse_timeout_secs(raw: &str) -> Result<u64> {
    raw.trim()
        .parse::<u64>()
        .with_context(|| format!("FETCH_TIMEOUT_SECS must be a whole number of seconds, got '{raw}'"))
}

/// Splits a comma-separated list, trimming entries and dropping blanks.
fn parse_company_options(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
impl Config {
    /// Config for tests: no environment lookups.
    pub fn for_tests(jobs_source: impl Into<String>) -> Self {
        Config {
            jobs_source: jobs_source.into(),
            port: 0,
            rust_log: "debug".to_string(),
            fetch_timeout_secs: 5,
            company_options: vec!["Acme".to_string(), "Widget Co".to_string()],
        }
    }
}
