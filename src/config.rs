//! Admin console configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser has no process environment, so values are baked in at compile
//! time through `option_env!` and parsed once at startup. The resulting
//! `AdminConfig` is provided via Leptos context to guards, pages, and the
//! remote verifier.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::str::FromStr;

pub const DEFAULT_API_BASE: &str = "/api";
pub const DEFAULT_LOGIN_PATH: &str = "/login";
pub const DEFAULT_HOME_PATH: &str = "/";
pub const DEFAULT_VERIFY_TIMEOUT_MS: u32 = 5_000;

pub const API_BASE_KEY: &str = "CINEMA_ADMIN_API_BASE";
pub const VERIFY_TIMEOUT_KEY: &str = "CINEMA_ADMIN_VERIFY_TIMEOUT_MS";
pub const CHECK_EXPIRY_KEY: &str = "CINEMA_ADMIN_CHECK_EXPIRY";
pub const VERIFY_REMOTE_KEY: &str = "CINEMA_ADMIN_VERIFY_REMOTE";
pub const REQUIRE_AUTHORIZATION_KEY: &str = "CINEMA_ADMIN_REQUIRE_AUTHORIZATION";
pub const LOG_LEVEL_KEY: &str = "CINEMA_ADMIN_LOG_LEVEL";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

/// Which refinement checks a protected guard runs after its synchronous decision.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GuardPolicy {
    /// Reject sessions whose token carries an elapsed `exp` claim.
    pub check_expiry: bool,
    /// Confirm the token with `POST /authenticate/verify`.
    pub verify_remote: bool,
    /// Confirm authorization with `POST /authenticate/authorize`.
    pub require_authorization: bool,
}

impl GuardPolicy {
    /// True when any refinement needs a network round trip.
    #[must_use]
    pub fn needs_remote(&self) -> bool {
        self.verify_remote || self.require_authorization
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminConfig {
    pub api_base: String,
    pub login_path: String,
    pub home_path: String,
    pub verify_timeout_ms: u32,
    pub policy: GuardPolicy,
    pub log_level: log::Level,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_owned(),
            login_path: DEFAULT_LOGIN_PATH.to_owned(),
            home_path: DEFAULT_HOME_PATH.to_owned(),
            verify_timeout_ms: DEFAULT_VERIFY_TIMEOUT_MS,
            policy: GuardPolicy::default(),
            log_level: log::Level::Info,
        }
    }
}

impl AdminConfig {
    /// Build config from compile-time environment values.
    ///
    /// Optional:
    /// - `CINEMA_ADMIN_API_BASE`: default `/api`
    /// - `CINEMA_ADMIN_VERIFY_TIMEOUT_MS`: default 5000
    /// - `CINEMA_ADMIN_CHECK_EXPIRY`, `CINEMA_ADMIN_VERIFY_REMOTE`,
    ///   `CINEMA_ADMIN_REQUIRE_AUTHORIZATION`: default off
    /// - `CINEMA_ADMIN_LOG_LEVEL`: default `info`
    ///
    /// Invalid values are logged and the defaults are used instead.
    #[must_use]
    pub fn from_env() -> Self {
        let lookup = |key: &str| -> Option<String> {
            let value = match key {
                API_BASE_KEY => option_env!("CINEMA_ADMIN_API_BASE"),
                VERIFY_TIMEOUT_KEY => option_env!("CINEMA_ADMIN_VERIFY_TIMEOUT_MS"),
                CHECK_EXPIRY_KEY => option_env!("CINEMA_ADMIN_CHECK_EXPIRY"),
                VERIFY_REMOTE_KEY => option_env!("CINEMA_ADMIN_VERIFY_REMOTE"),
                REQUIRE_AUTHORIZATION_KEY => option_env!("CINEMA_ADMIN_REQUIRE_AUTHORIZATION"),
                LOG_LEVEL_KEY => option_env!("CINEMA_ADMIN_LOG_LEVEL"),
                _ => None,
            };
            value.map(str::to_owned)
        };
        match Self::from_lookup(lookup) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("admin config rejected, using defaults: {e}");
                Self::default()
            }
        }
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for a present but unparseable value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let api_base = lookup(API_BASE_KEY)
            .map(|v| normalize_api_base(&v))
            .unwrap_or(defaults.api_base);
        let verify_timeout_ms = match lookup(VERIFY_TIMEOUT_KEY) {
            Some(raw) => parse_timeout(&raw)?,
            None => defaults.verify_timeout_ms,
        };
        let policy = GuardPolicy {
            check_expiry: parse_flag(CHECK_EXPIRY_KEY, lookup(CHECK_EXPIRY_KEY))?,
            verify_remote: parse_flag(VERIFY_REMOTE_KEY, lookup(VERIFY_REMOTE_KEY))?,
            require_authorization: parse_flag(REQUIRE_AUTHORIZATION_KEY, lookup(REQUIRE_AUTHORIZATION_KEY))?,
        };
        let log_level = match lookup(LOG_LEVEL_KEY) {
            Some(raw) => log::Level::from_str(raw.trim())
                .map_err(|_| ConfigError::InvalidValue { key: LOG_LEVEL_KEY, value: raw.clone() })?,
            None => defaults.log_level,
        };

        Ok(Self { api_base, login_path: defaults.login_path, home_path: defaults.home_path, verify_timeout_ms, policy, log_level })
    }

    /// Join an endpoint path onto the API base.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base, path.trim_start_matches('/'))
    }
}

fn normalize_api_base(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() { DEFAULT_API_BASE.to_owned() } else { trimmed.to_owned() }
}

fn parse_timeout(raw: &str) -> Result<u32, ConfigError> {
    match raw.trim().parse::<u32>() {
        Ok(ms) if ms > 0 => Ok(ms),
        _ => Err(ConfigError::InvalidValue { key: VERIFY_TIMEOUT_KEY, value: raw.to_owned() }),
    }
}

fn parse_flag(key: &'static str, raw: Option<String>) -> Result<bool, ConfigError> {
    let Some(raw) = raw else {
        return Ok(false);
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::InvalidValue { key, value: raw }),
    }
}
