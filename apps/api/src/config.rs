use anyhow::{Context, Result};

const DEFAULT_LLM_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
const DEFAULT_JOBS_FEED_URL: &str = "https://remotive.com/api/remote-jobs";

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub groq_api_key: String,
    pub llm_api_url: String,
    pub jobs_feed_url: String,
    pub search_api_url: String,
    pub catalog_path: String,
    pub jobs_index_path: String,
    pub enable_llm_matching: bool,
    pub ping_message: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            groq_api_key: require_env("GROQ_API_KEY")?,
            llm_api_url: env_or("LLM_API_URL", DEFAULT_LLM_API_URL),
            jobs_feed_url: env_or("JOBS_FEED_URL", DEFAULT_JOBS_FEED_URL),
            search_api_url: require_env("SEARCH_API_URL")?,
            catalog_path: env_or("CATALOG_PATH", "catalogs/coursecertskills.json"),
            jobs_index_path: env_or("JOBS_INDEX_PATH", "data/jobs.json"),
            enable_llm_matching: std::env::var("ENABLE_LLM_MATCHING")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
            ping_message: env_or("PING_MESSAGE", "ping"),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
