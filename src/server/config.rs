use std::path::PathBuf;

use chrono::{FixedOffset, Offset, Utc};

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_MEDIA_ROOT: &str = "media";

/// Credentials for the staff account created on first start.
pub struct AdminCredentials {
    pub email: String,
    pub password: String,
}

pub struct Config {
    pub database_url: String,
    pub bind_addr: String,
    pub media_root: PathBuf,

    /// Offset used to decide which calendar day a timestamp falls on in date filters.
    pub utc_offset: FixedOffset,

    pub admin: Option<AdminCredentials>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let utc_offset = match lookup("UTC_OFFSET_MINUTES") {
            Some(value) => parse_utc_offset(&value)?,
            None => Utc.fix(),
        };

        let admin = match (lookup("ADMIN_EMAIL"), lookup("ADMIN_PASSWORD")) {
            (Some(email), Some(password)) => Some(AdminCredentials { email, password }),
            (Some(_), None) => {
                return Err(ConfigError::MissingEnvVar("ADMIN_PASSWORD".to_string()).into())
            }
            (None, Some(_)) => {
                return Err(ConfigError::MissingEnvVar("ADMIN_EMAIL".to_string()).into())
            }
            (None, None) => None,
        };

        Ok(Self {
            database_url: lookup("DATABASE_URL")
                .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_addr: lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            media_root: PathBuf::from(
                lookup("MEDIA_ROOT").unwrap_or_else(|| DEFAULT_MEDIA_ROOT.to_string()),
            ),
            utc_offset,
            admin,
        })
    }
}

fn parse_utc_offset(value: &str) -> Result<FixedOffset, ConfigError> {
    let minutes = value
        .trim()
        .parse::<i32>()
        .map_err(|e| invalid("UTC_OFFSET_MINUTES", value, &e.to_string()))?;

    minutes
        .checked_mul(60)
        .and_then(FixedOffset::east_opt)
        .ok_or_else(|| invalid("UTC_OFFSET_MINUTES", value, "offset must be within ±24 hours"))
}

fn invalid(name: &str, value: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
