//! Runtime configuration from the environment (and `.env`, via dotenvy).

use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_DB_PATH: &str = "database.json";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_STATIC_ROOT: &str = ".";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} has invalid value {value:?}; expected true or false")]
    InvalidBool { name: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub jwt_secret: String,
    pub db_path: PathBuf,
    pub create_db_if_missing: bool,
    pub bind_addr: String,
    pub static_root: PathBuf,
}

impl Config {
    /// Loads `.env` if present, then reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let jwt_secret = get("JWT_SECRET").ok_or(ConfigError::Missing("JWT_SECRET"))?;

        let create_db_if_missing = match get("DB_CREATE_IF_MISSING") {
            None => true,
            Some(value) => parse_bool(&value).ok_or(ConfigError::InvalidBool {
                name: "DB_CREATE_IF_MISSING",
                value,
            })?,
        };

        Ok(Self {
            jwt_secret,
            db_path: get("DB_PATH")
                .unwrap_or_else(|| DEFAULT_DB_PATH.to_string())
                .into(),
            create_db_if_missing,
            bind_addr: get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            static_root: get("STATIC_ROOT")
                .unwrap_or_else(|| DEFAULT_STATIC_ROOT.to_string())
                .into(),
        })
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
