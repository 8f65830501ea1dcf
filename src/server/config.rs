use std::{path::PathBuf, time::Duration};

use url::Url;

use crate::server::error::config::ConfigError;

const DEFAULT_PORT: u16 = 3010;
const DEFAULT_JWT_EXPIRES_IN: Duration = Duration::from_secs(60 * 60);
const DEFAULT_STORAGE_DIR: &str = "storage";

pub struct Config {
    pub database_url: String,

    pub jwt_secret: String,
    pub jwt_expires_in: Duration,

    pub port: u16,
    pub app_url: Url,
    pub storage_dir: PathBuf,
    pub cors_allowed_origin: Option<String>,
}

impl Config {
    /// Loads configuration from the process environment.
    ///
    /// Call `dotenvy::dotenv()` first so `.env` values are visible.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from a variable lookup function.
    ///
    /// Empty values are treated as unset.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of the named variable, if set
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and every value parsed
    /// - `Err(ConfigError::MissingEnvVar)` - `DATABASE_URL` or `JWT_SECRET` not set
    /// - `Err(ConfigError::InvalidEnvVar)` - A value could not be parsed
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let require =
            |name: &str| get(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()));

        let port = match get("PORT") {
            Some(value) => value.trim().parse::<u16>().map_err(|e| invalid("PORT", e))?,
            None => DEFAULT_PORT,
        };

        let jwt_expires_in = match get("JWT_EXPIRES_IN") {
            Some(value) => parse_duration(&value).map_err(|e| invalid("JWT_EXPIRES_IN", e))?,
            None => DEFAULT_JWT_EXPIRES_IN,
        };

        let app_url = get("APP_URL").unwrap_or_else(|| format!("http://localhost:{}", port));
        let app_url = Url::parse(app_url.trim()).map_err(|e| invalid("APP_URL", e))?;
        if app_url.cannot_be_a_base() {
            return Err(invalid("APP_URL", "must be an absolute http(s) URL"));
        }

        Ok(Self {
            database_url: require("DATABASE_URL")?,
            jwt_secret: require("JWT_SECRET")?,
            jwt_expires_in,
            port,
            app_url,
            storage_dir: PathBuf::from(
                get("STORAGE_DIR").unwrap_or_else(|| DEFAULT_STORAGE_DIR.to_string()),
            ),
            cors_allowed_origin: get("CORS_ALLOWED_ORIGIN").map(|origin| origin.trim().to_string()),
        })
    }
}

fn invalid(name: &str, reason: impl ToString) -> ConfigError {
    ConfigError::InvalidEnvVar {
        name: name.to_string(),
        reason: reason.to_string(),
    }
}

/// Parses durations like `3600`, `90s`, `15m`, `1h` or `7d`. A bare number means seconds.
fn parse_duration(value: &str) -> Result<Duration, String> {
    let value = value.trim();
    let (digits, multiplier) = match value.char_indices().last() {
        Some((idx, 's')) => (&value[..idx], 1),
        Some((idx, 'm')) => (&value[..idx], 60),
        Some((idx, 'h')) => (&value[..idx], 60 * 60),
        Some((idx, 'd')) => (&value[..idx], 24 * 60 * 60),
        _ => (value, 1),
    };

    let amount = digits
        .parse::<u64>()
        .map_err(|_| format!("'{}' is not a duration like 3600, 90s, 15m, 1h or 7d", value))?;
    if amount == 0 {
        return Err("duration must be greater than zero".to_string());
    }

    amount
        .checked_mul(multiplier)
        .map(Duration::from_secs)
        .ok_or_else(|| format!("'{}' is too large", value))
}
