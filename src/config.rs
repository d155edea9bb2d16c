//! Process configuration, resolved once at startup.
//!
//! Values come from the environment, after an optional `.env` file has been
//! loaded into it:
//!
//! - `WEBHOOK_SECRET` (required): HMAC key shared with Nylas.
//! - `WEBHOOK_BIND_ADDR`: listen address, default `0.0.0.0:5000`.
//! - `WEBHOOK_TIMEZONE`: IANA zone used to display event dates. Defaults to
//!   the process's local zone: `TZ` when it names an IANA zone, otherwise
//!   the host's `/etc/localtime`, or UTC when neither can be resolved.

use std::fmt;
use std::net::SocketAddr;

use chrono_tz::Tz;

use crate::error::ConfigError;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";

#[derive(Clone)]
pub struct Config {
    pub secret: Vec<u8>,
    pub bind_addr: SocketAddr,
    pub timezone: Tz,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("secret", &"<redacted>")
            .field("bind_addr", &self.bind_addr)
            .field("timezone", &self.timezone)
            .finish()
    }
}

impl Config {
    /// Load `.env` (if present) and read the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                tracing::warn!(error = %e, "failed to load .env file");
            }
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret = lookup("WEBHOOK_SECRET")
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::SecretMissing)?
            .into_bytes();

        let addr = lookup("WEBHOOK_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = addr
            .parse()
            .map_err(|source| ConfigError::InvalidBindAddress { addr, source })?;

        let timezone = match lookup("WEBHOOK_TIMEZONE").filter(|s| !s.is_empty()) {
            Some(name) => parse_timezone(&name)?,
            None => local_timezone(lookup("TZ").as_deref()),
        };

        Ok(Self {
            secret,
            bind_addr,
            timezone,
        })
    }
}

pub fn parse_timezone(name: &str) -> Result<Tz, ConfigError> {
    name.parse::<Tz>()
        .map_err(|_| ConfigError::InvalidTimezone(name.to_string()))
}

/// The process's local zone given the value of `TZ`, falling back to the
/// host zone and then UTC.
pub fn local_timezone(tz_var: Option<&str>) -> Tz {
    // POSIX allows a leading ':' before a zone name
    if let Some(name) = tz_var.map(|v| v.trim_start_matches(':')).filter(|v| !v.is_empty()) {
        match parse_timezone(name) {
            Ok(tz) => return tz,
            Err(e) => tracing::warn!(error = %e, "TZ is not an IANA zone, ignoring it"),
        }
    }

    match iana_time_zone::get_timezone() {
        Ok(name) => parse_timezone(&name).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "local timezone not recognised, using UTC");
            Tz::UTC
        }),
        Err(e) => {
            tracing::warn!(error = %e, "could not detect local timezone, using UTC");
            Tz::UTC
        }
    }
}
