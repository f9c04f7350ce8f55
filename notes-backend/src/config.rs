use std::env;
use std::str::FromStr;

/// Environment variable names - single source of truth
pub mod env_vars {
    pub const HOST: &str = "NOTES_HOST";
    pub const PORT: &str = "PORT";
    /// The single browser origin allowed by CORS (e.g. "http://localhost:3000").
    pub const CORS_ALLOWED_ORIGIN: &str = "CORS_ALLOWED_ORIGIN";
}

/// Default values
pub mod defaults {
    pub const HOST: &str = "127.0.0.1";
    pub const PORT: u16 = 8000;
    pub const CORS_ALLOWED_ORIGIN: &str = "http://localhost:3000";
}

#[derive(Clone, Debug)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origin: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: defaults::HOST.to_string(),
            port: defaults::PORT,
            cors_allowed_origin: defaults::CORS_ALLOWED_ORIGIN.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup (the process env in production).
    fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Self {
        Self {
            host: lookup(env_vars::HOST).unwrap_or_else(|| defaults::HOST.to_string()),
            port: parse_or_default(env_vars::PORT, lookup(env_vars::PORT), defaults::PORT),
            cors_allowed_origin: lookup(env_vars::CORS_ALLOWED_ORIGIN)
                .map(|origin| origin.trim_end_matches('/').to_string())
                .unwrap_or_else(|| defaults::CORS_ALLOWED_ORIGIN.to_string()),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or_default<T: FromStr + Copy + std::fmt::Display>(
    key: &str,
    raw: Option<String>,
    default: T,
) -> T {
    match raw {
        Some(value) => value.trim().parse().unwrap_or_else(|_| {
            log::warn!("Invalid {} value '{}', using default {}", key, value, default);
            default
        }),
        None => default,
    }
}
