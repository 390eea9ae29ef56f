use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

pub mod mock;

pub const PRODUCTION_API_URL: &str = "https://api.remotejobs.ai";
pub const DEVELOPMENT_API_URL: &str = "http://localhost:8000";

/// Client-side timeout for every upstream call. An elapsed timeout aborts the call.
pub const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(5);

/// Upstream job API paths, relative to the configured base URL.
pub mod endpoints {
    pub const JOBS_SEARCH: &str = "/api/jobs";
    pub const RECOMMENDATION: &str = "/api/jobs/recommendation";
    pub const STATS: &str = "/api/jobs/stats";
    pub const ADMIN_HEALTH: &str = "/api/admin/health";
    pub const ADMIN_STATS: &str = "/api/admin/stats";
}

/// Build mode flag. The only input that decides which upstream API is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildMode {
    Development,
    Production,
}

impl BuildMode {
    /// `production` (any case) selects production; everything else is development.
    pub fn parse(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("production") {
            BuildMode::Production
        } else {
            BuildMode::Development
        }
    }

    pub fn api_base_url(self) -> &'static str {
        match self {
            BuildMode::Production => PRODUCTION_API_URL,
            BuildMode::Development => DEVELOPMENT_API_URL,
        }
    }
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub mode: BuildMode,
    pub api_base_url: String,
    pub upstream_timeout: Duration,
    pub resume_path: PathBuf,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let mode = BuildMode::parse(&env_or("APP_ENV", "development"));

        Ok(Config {
            mode,
            api_base_url: mode.api_base_url().to_string(),
            upstream_timeout: UPSTREAM_TIMEOUT,
            resume_path: PathBuf::from(env_or("RESUME_PATH", "static/resume.pdf")),
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
