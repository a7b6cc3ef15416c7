use std::env;
use std::path::PathBuf;

use crate::error::ConfigError;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_STATIC_DIR: &str = "static";

/// Server settings, read from the environment (after `.env` is loaded).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
    /// Treat `max_participants` as a hard cap. Off unless explicitly enabled.
    pub enforce_capacity: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            enforce_capacity: false,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] but with an injectable variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(host) = lookup("HOST").filter(|v| !v.trim().is_empty()) {
            cfg.host = host.trim().to_string();
        }
        if let Some(port) = lookup("PORT") {
            cfg.port = port
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue {
                    key: "PORT",
                    value: port.clone(),
                    reason: "expected a port number".to_string(),
                })?;
        }
        if let Some(dir) = lookup("STATIC_DIR").filter(|v| !v.trim().is_empty()) {
            cfg.static_dir = PathBuf::from(dir.trim());
        }
        if let Some(flag) = lookup("ENFORCE_CAPACITY") {
            cfg.enforce_capacity = parse_bool(&flag).ok_or_else(|| ConfigError::InvalidValue {
                key: "ENFORCE_CAPACITY",
                value: flag.clone(),
                reason: "expected true/false".to_string(),
            })?;
        }

        Ok(cfg)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Used when the primary port is taken.
    pub fn fallback_bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port.wrapping_add(1))
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
