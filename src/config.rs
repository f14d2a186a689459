// src/config.rs
use crate::application::logging::EmailLogPolicy;
use std::{env, fmt, str::FromStr, time::Duration};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: String,
    listen_addr: String,
    token_ttl: Duration,
    environment: Environment,
    email_log_policy: EmailLogPolicy,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Deployment environment. Only changes logging verbosity and format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Local,
    Dev,
    Prod,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Dev => "dev",
            Environment::Prod => "prod",
        }
    }

    /// Default filter directive used when `RUST_LOG` is not set.
    pub fn default_log_filter(&self) -> &'static str {
        match self {
            Environment::Local | Environment::Dev => "debug,sqlx=warn,tower_http=debug",
            Environment::Prod => "info,sqlx=warn,tower_http=info",
        }
    }

    pub fn json_logs(&self) -> bool {
        !matches!(self, Environment::Local)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "local" => Ok(Environment::Local),
            "dev" => Ok(Environment::Dev),
            "prod" => Ok(Environment::Prod),
            other => Err(ConfigError::Invalid(format!(
                "APP_ENV must be one of local, dev, prod (got '{other}')"
            ))),
        }
    }
}

fn default_database_url() -> String {
    "sqlite://sso.db".into()
}

fn default_listen_addr() -> String {
    "127.0.0.1:44044".into()
}

fn default_token_ttl() -> u64 {
    3600
}

impl AppConfig {
    /// Build configuration from environment variables, after letting a `.env`
    /// file populate them.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(default_database_url);
        if database_url.trim().is_empty() {
            return Err(ConfigError::Missing("DATABASE_URL"));
        }
        let listen_addr = lookup("LISTEN_ADDR").unwrap_or_else(default_listen_addr);

        let token_ttl_secs = match lookup("TOKEN_TTL_SECONDS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| {
                    ConfigError::Invalid(format!(
                        "TOKEN_TTL_SECONDS must be a positive integer (got '{raw}')"
                    ))
                })?,
            None => default_token_ttl(),
        };

        let environment = lookup("APP_ENV")
            .map(|raw| raw.trim().parse::<Environment>())
            .transpose()?
            .unwrap_or_default();

        let email_log_policy = lookup("EMAIL_LOG_POLICY")
            .map(|raw| raw.trim().parse::<EmailLogPolicy>())
            .transpose()
            .map_err(ConfigError::Invalid)?
            .unwrap_or_default();

        Ok(Self {
            database_url,
            listen_addr,
            token_ttl: Duration::from_secs(token_ttl_secs),
            environment,
            email_log_policy,
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn token_ttl(&self) -> Duration {
        self.token_ttl
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    pub fn email_log_policy(&self) -> EmailLogPolicy {
        self.email_log_policy
    }
}
