//! API server configuration loaded from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use enroll_core::DEFAULT_MAX_USERNAME_LEN;
use thiserror::Error;

/// Errors during configuration loading.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable is set but its value cannot be used.
    #[error("invalid value for {var}: {value:?}")]
    Invalid {
        /// Variable name.
        var: &'static str,
        /// Offending value.
        value: String,
    },
}

/// API server runtime configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// `SQLite` connection URL; the file is created if missing.
    pub database_url: String,
    /// TCP address to bind (e.g. `0.0.0.0:8080`).
    pub bind_addr: String,
    /// Longest accepted username, in characters.
    pub max_username_len: usize,
    /// How long a writer waits on a locked database before failing.
    pub busy_timeout: Duration,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if `MAX_USERNAME_LEN` or
    /// `DB_BUSY_TIMEOUT_SECS` is set to something other than a positive integer.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// See [`ApiConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let max_username_len = match lookup("MAX_USERNAME_LEN") {
            Some(raw) => parse_positive("MAX_USERNAME_LEN", raw)?,
            None => DEFAULT_MAX_USERNAME_LEN,
        };
        let busy_secs: u64 = match lookup("DB_BUSY_TIMEOUT_SECS") {
            Some(raw) => parse_positive("DB_BUSY_TIMEOUT_SECS", raw)?,
            None => 5,
        };

        Ok(Self {
            database_url: lookup("DATABASE_URL").unwrap_or_else(|| "sqlite://enroll.db".to_owned()),
            bind_addr: lookup("BIND_ADDR").unwrap_or_else(|| "0.0.0.0:8080".to_owned()),
            max_username_len,
            busy_timeout: Duration::from_secs(busy_secs),
        })
    }
}

fn parse_positive<T>(var: &'static str, raw: String) -> Result<T, ConfigError>
where
    T: FromStr + PartialOrd + Default,
{
    match raw.trim().parse::<T>() {
        Ok(n) if n > T::default() => Ok(n),
        _ => Err(ConfigError::Invalid { var, value: raw }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(pairs: &[(&str, &str)]) -> Result<ApiConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        ApiConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let cfg = load(&[]).unwrap();
        assert_eq!(cfg.database_url, "sqlite://enroll.db");
        assert_eq!(cfg.bind_addr, "0.0.0.0:8080");
        assert_eq!(cfg.max_username_len, 50);
        assert_eq!(cfg.busy_timeout, Duration::from_secs(5));
    }

    #[test]
    fn overrides_are_read() {
        let cfg = load(&[
            ("DATABASE_URL", "sqlite:///var/lib/enroll/users.db"),
            ("MAX_USERNAME_LEN", "12"),
        ])
        .unwrap();
        assert_eq!(cfg.database_url, "sqlite:///var/lib/enroll/users.db");
        assert_eq!(cfg.max_username_len, 12);
    }

    #[test]
    fn zero_username_len_rejected() {
        assert_eq!(
            load(&[("MAX_USERNAME_LEN", "0")]).unwrap_err(),
            ConfigError::Invalid {
                var: "MAX_USERNAME_LEN",
                value: "0".to_owned()
            }
        );
    }

    #[test]
    fn non_numeric_timeout_rejected() {
        assert!(load(&[("DB_BUSY_TIMEOUT_SECS", "soon")]).is_err());
    }
}
