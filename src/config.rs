use std::env;
use std::fmt;

use thiserror::Error;

use crate::auth::password::DEFAULT_COST;
use crate::auth::LoginPolicy;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{key} has an invalid value `{value}`: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Process configuration, read once at startup.
#[derive(Clone)]
pub struct Config {
    /// PostgreSQL URL. Without one the service keeps its data in memory.
    pub database_url: Option<String>,
    pub server_port: u16,
    pub server_host: String,
    pub jwt_secret: String,
    pub bcrypt_cost: u32,
    pub login_policy: LoginPolicy,
}

// Hand-written so the secret and database credentials never end up in logs.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &self.database_url.as_ref().map(|_| "<set>"))
            .field("server_port", &self.server_port)
            .field("server_host", &self.server_host)
            .field("jwt_secret", &"<redacted>")
            .field("bcrypt_cost", &self.bcrypt_cost)
            .field("login_policy", &self.login_policy)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let jwt_secret = lookup("JWT_SECRET")
            .filter(|secret| !secret.trim().is_empty())
            .ok_or(ConfigError::Missing("JWT_SECRET"))?;

        let server_port = match lookup("SERVER_PORT") {
            Some(value) => value.parse().map_err(|e: std::num::ParseIntError| {
                ConfigError::Invalid {
                    key: "SERVER_PORT",
                    value: value.clone(),
                    reason: e.to_string(),
                }
            })?,
            None => 8080,
        };

        let bcrypt_cost = match lookup("BCRYPT_COST") {
            Some(value) => match value.parse::<u32>() {
                Ok(cost) if (4..=31).contains(&cost) => cost,
                Ok(_) => {
                    return Err(ConfigError::Invalid {
                        key: "BCRYPT_COST",
                        value,
                        reason: "must be between 4 and 31".into(),
                    })
                }
                Err(e) => {
                    return Err(ConfigError::Invalid {
                        key: "BCRYPT_COST",
                        value,
                        reason: e.to_string(),
                    })
                }
            },
            None => DEFAULT_COST,
        };

        let login_policy = match lookup("LOGIN_RESPONSE") {
            Some(value) => value.parse().map_err(|reason| ConfigError::Invalid {
                key: "LOGIN_RESPONSE",
                value: value.clone(),
                reason,
            })?,
            None => LoginPolicy::default(),
        };

        Ok(Self {
            database_url: lookup("DATABASE_URL").filter(|url| !url.is_empty()),
            server_port,
            server_host: lookup("SERVER_HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            jwt_secret,
            bcrypt_cost,
            login_policy,
        })
    }

    pub fn server_url(&self) -> String {
        format!("http://{}:{}", self.server_host, self.server_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::from_lookup(lookup_from(&[("JWT_SECRET", "s3cret")])).unwrap();

        assert_eq!(config.database_url, None);
        assert_eq!(config.server_port, 8080);
        assert_eq!(config.server_host, "127.0.0.1");
        assert_eq!(config.bcrypt_cost, 12);
        assert_eq!(config.login_policy, LoginPolicy::IssueToken);
        assert_eq!(config.server_url(), "http://127.0.0.1:8080");
    }

    #[test]
    fn test_config_custom_values() {
        let config = Config::from_lookup(lookup_from(&[
            ("JWT_SECRET", "s3cret"),
            ("DATABASE_URL", "postgres://test"),
            ("SERVER_PORT", "3000"),
            ("SERVER_HOST", "0.0.0.0"),
            ("BCRYPT_COST", "10"),
            ("LOGIN_RESPONSE", "user"),
        ]))
        .unwrap();

        assert_eq!(config.database_url.as_deref(), Some("postgres://test"));
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.server_host, "0.0.0.0");
        assert_eq!(config.bcrypt_cost, 10);
        assert_eq!(config.login_policy, LoginPolicy::PublicView);
    }

    #[test]
    fn test_missing_secret_is_fatal() {
        assert_eq!(
            Config::from_lookup(lookup_from(&[])).unwrap_err(),
            ConfigError::Missing("JWT_SECRET")
        );
        assert_eq!(
            Config::from_lookup(lookup_from(&[("JWT_SECRET", "  ")])).unwrap_err(),
            ConfigError::Missing("JWT_SECRET")
        );
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let cases = [
            ("SERVER_PORT", "eighty"),
            ("BCRYPT_COST", "3"),
            ("BCRYPT_COST", "lots"),
            ("LOGIN_RESPONSE", "cookie"),
        ];
        for (key, value) in cases {
            let result = Config::from_lookup(lookup_from(&[("JWT_SECRET", "s3cret"), (key, value)]));
            assert!(
                matches!(result, Err(ConfigError::Invalid { key: k, .. }) if k == key),
                "{}={} should be rejected",
                key,
                value
            );
        }
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = Config::from_lookup(lookup_from(&[
            ("JWT_SECRET", "s3cret"),
            ("DATABASE_URL", "postgres://user:pw@db"),
        ]))
        .unwrap();
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("s3cret"));
        assert!(!rendered.contains("pw@db"));
    }
}
