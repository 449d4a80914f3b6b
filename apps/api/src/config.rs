use std::time::Duration;

use anyhow::{bail, Context, Result};
use secrecy::SecretString;

use crate::planning::extractor::NoJobsPolicy;

const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Application configuration loaded from environment variables.
/// Startup fails if the API key is missing or a value does not parse.
#[derive(Debug)]
pub struct Config {
    pub openai_api_key: SecretString,
    pub openai_base_url: String,
    pub port: u16,
    pub rust_log: String,
    pub llm_timeout: Duration,
    pub llm_max_retries: u32,
    pub no_jobs_policy: NoJobsPolicy,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let llm_max_retries = optional_env("LLM_MAX_RETRIES", "3")
            .parse::<u32>()
            .context("LLM_MAX_RETRIES must be a positive integer")?;
        if llm_max_retries == 0 {
            bail!("LLM_MAX_RETRIES must be at least 1");
        }

        Ok(Config {
            openai_api_key: SecretString::from(require_env("OPENAI_API_KEY")?),
            openai_base_url: optional_env("OPENAI_BASE_URL", DEFAULT_OPENAI_BASE_URL),
            port: optional_env("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: optional_env("RUST_LOG", "info"),
            llm_timeout: Duration::from_secs(
                optional_env("LLM_TIMEOUT_SECS", "120")
                    .parse::<u64>()
                    .context("LLM_TIMEOUT_SECS must be a number of seconds")?,
            ),
            llm_max_retries,
            no_jobs_policy: parse_no_jobs_policy(&optional_env("NO_JOBS_POLICY", "empty"))?,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    let value =
        std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))?;
    if value.trim().is_empty() {
        bail!("Required environment variable '{key}' is empty");
    }
    Ok(value)
}

fn optional_env(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_no_jobs_policy(raw: &str) -> Result<NoJobsPolicy> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "empty" => Ok(NoJobsPolicy::Empty),
        "placeholder" => Ok(NoJobsPolicy::Placeholder),
        other => bail!("NO_JOBS_POLICY must be 'empty' or 'placeholder', got '{other}'"),
    }
}
