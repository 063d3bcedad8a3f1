//! Backend base URLs, resolved once at startup.
//!
//! `ServiceConfig::load` reads a `.env` file if present and then the process
//! environment. Resolution itself goes through a lookup closure so tests
//! never mutate the real environment.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

pub const PRODUCT_API_URL: &str = "PRODUCT_API_URL";
pub const AI_SERVICE_URL: &str = "AI_SERVICE_URL";
pub const ORDER_API_URL: &str = "ORDER_API_URL";
pub const DEPLOYMENT_MODE: &str = "DEPLOYMENT_MODE";

pub const DEFAULT_PRODUCT_URL: &str = "http://localhost:3060";
pub const DEFAULT_AI_URL: &str = "http://localhost:3080";
pub const DEFAULT_ORDER_URL: &str = "http://localhost:3070";
/// In-cluster address of the makeline service.
pub const PRODUCTION_ORDER_URL: &str = "http://makeline-service:3070";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown deployment mode {0:?} (expected \"development\" or \"production\")")]
    UnknownMode(String),
}

/// Decides the fallback for the order service URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeploymentMode {
    #[default]
    Development,
    Production,
}

impl FromStr for DeploymentMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(DeploymentMode::Development),
            "production" | "prod" => Ok(DeploymentMode::Production),
            other => Err(ConfigError::UnknownMode(other.to_string())),
        }
    }
}

impl fmt::Display for DeploymentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeploymentMode::Development => f.write_str("development"),
            DeploymentMode::Production => f.write_str("production"),
        }
    }
}

/// Base URLs of the three backend services.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub product_base_url: String,
    pub ai_base_url: String,
    pub order_base_url: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self::for_mode(DeploymentMode::Development)
    }
}

impl ServiceConfig {
    /// Builds a config from explicit base URLs. Trailing slashes are stripped.
    pub fn new(product_base_url: &str, ai_base_url: &str, order_base_url: &str) -> Self {
        Self {
            product_base_url: normalize(product_base_url),
            ai_base_url: normalize(ai_base_url),
            order_base_url: normalize(order_base_url),
        }
    }

    /// The documented fallbacks for a deployment mode.
    pub fn for_mode(mode: DeploymentMode) -> Self {
        let order = match mode {
            DeploymentMode::Development => DEFAULT_ORDER_URL,
            DeploymentMode::Production => PRODUCTION_ORDER_URL,
        };
        Self::new(DEFAULT_PRODUCT_URL, DEFAULT_AI_URL, order)
    }

    /// Load `.env` if present, then resolve from the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        _ = dotenvy::dotenv();
        Self::from_env()
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve every setting through `lookup`; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let mode = match get(DEPLOYMENT_MODE) {
            Some(raw) => raw.parse()?,
            None => DeploymentMode::default(),
        };
        let defaults = Self::for_mode(mode);

        let config = Self::new(
            &get(PRODUCT_API_URL).unwrap_or(defaults.product_base_url),
            &get(AI_SERVICE_URL).unwrap_or(defaults.ai_base_url),
            &get(ORDER_API_URL).unwrap_or(defaults.order_base_url),
        );
        tracing::debug!(
            %mode,
            product = %config.product_base_url,
            ai = %config.ai_base_url,
            order = %config.order_base_url,
            "resolved service config"
        );
        Ok(config)
    }
}

fn normalize(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
