use anyhow::{ensure, Context, Result};
use axum::http::HeaderValue;
use rand::{distributions::Alphanumeric, Rng};

const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";
const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_CORS_ORIGINS: &str = "http://localhost,http://localhost:3000";
const GENERATED_SECRET_LEN: usize = 64;
/// Upper bound on token lifetime: 30 days.
const MAX_TOKEN_EXPIRE_MINUTES: i64 = 30 * 24 * 60;
const MAX_LLM_TIMEOUT_SECS: u64 = 600;

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_api_base: String,
    pub llm_timeout_secs: u64,
    pub jwt_secret: String,
    /// True when no JWT_SECRET was provided and one was generated for this process.
    pub jwt_secret_generated: bool,
    pub access_token_expire_minutes: i64,
    pub cors_origins: Vec<HeaderValue>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |key: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .with_context(|| format!("Required environment variable '{key}' is not set"))
        };
        let or_default = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let (jwt_secret, jwt_secret_generated) = match lookup("JWT_SECRET") {
            Some(secret) if !secret.is_empty() => (secret, false),
            _ => (generate_secret(), true),
        };

        Ok(Config {
            database_url: require("DATABASE_URL")?,
            gemini_api_key: require("GEMINI_API_KEY")?,
            gemini_model: or_default("GEMINI_MODEL", DEFAULT_GEMINI_MODEL),
            gemini_api_base: or_default("GEMINI_API_BASE", DEFAULT_GEMINI_API_BASE)
                .trim_end_matches('/')
                .to_string(),
            llm_timeout_secs: parse_bounded(
                "LLM_TIMEOUT_SECS",
                &or_default("LLM_TIMEOUT_SECS", "60"),
                1,
                MAX_LLM_TIMEOUT_SECS,
            )?,
            jwt_secret,
            jwt_secret_generated,
            access_token_expire_minutes: parse_bounded(
                "ACCESS_TOKEN_EXPIRE_MINUTES",
                &or_default("ACCESS_TOKEN_EXPIRE_MINUTES", "30"),
                1,
                MAX_TOKEN_EXPIRE_MINUTES,
            )?,
            cors_origins: parse_origins(&or_default("CORS_ORIGINS", DEFAULT_CORS_ORIGINS))?,
            port: or_default("PORT", "8000")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: or_default("RUST_LOG", "info"),
        })
    }
}

/// Parses an integer and checks it lies in `min..=max`.
fn parse_bounded<T>(key: &str, raw: &str, min: T, max: T) -> Result<T>
where
    T: std::str::FromStr + PartialOrd + std::fmt::Display + Copy,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let value = raw
        .trim()
        .parse::<T>()
        .with_context(|| format!("{key} must be a whole number, got '{raw}'"))?;
    ensure!(
        value >= min && value <= max,
        "{key} must be between {min} and {max}, got {value}"
    );
    Ok(value)
}

fn parse_origins(raw: &str) -> Result<Vec<HeaderValue>> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(|origin| {
            // Credentialed CORS cannot use a wildcard origin.
            ensure!(
                origin != "*",
                "CORS_ORIGINS cannot contain '*' because credentials are allowed; list origins explicitly"
            );
            origin
                .parse::<HeaderValue>()
                .with_context(|| format!("Invalid CORS origin '{origin}'"))
        })
        .collect()
}

fn generate_secret() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(GENERATED_SECRET_LEN)
        .map(char::from)
        .collect()
}
