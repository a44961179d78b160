//! Process configuration parsed from environment variables.

use crate::tenant::{DEFAULT_TENANTS, FALLBACK_TENANT, TenantResolver};

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub port: u16,
    pub tenants: Vec<String>,
    pub trust_forwarded_host: bool,
}

impl AppConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `TENANTS`: comma-separated allow-list, default `kolder,jpont`
    /// - `TRUST_FORWARDED_HOST`: read `X-Forwarded-Host` before `Host`, default off
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when `PORT` is not a valid port,
    /// when `TENANTS` names the fallback tenant, or when
    /// `TRUST_FORWARDED_HOST` is not a recognised boolean.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidValue { key: "PORT", value: raw.clone() })?,
            Err(_) => DEFAULT_PORT,
        };
        let tenants = parse_tenants(std::env::var("TENANTS").ok().as_deref())?;
        let trust_forwarded_host = match std::env::var("TRUST_FORWARDED_HOST") {
            Ok(raw) => parse_bool(&raw)
                .ok_or_else(|| ConfigError::InvalidValue { key: "TRUST_FORWARDED_HOST", value: raw.clone() })?,
            Err(_) => false,
        };

        Ok(Self { port, tenants, trust_forwarded_host })
    }

    #[must_use]
    pub fn resolver(&self) -> TenantResolver {
        TenantResolver::new(self.tenants.iter().cloned())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { port: DEFAULT_PORT, tenants: default_tenants(), trust_forwarded_host: false }
    }
}

fn default_tenants() -> Vec<String> {
    DEFAULT_TENANTS.iter().map(|code| (*code).to_owned()).collect()
}

/// Split a comma-separated allow-list. Falls back to the compiled-in list when
/// nothing usable remains. The fallback key is reserved and cannot be listed.
fn parse_tenants(raw: Option<&str>) -> Result<Vec<String>, ConfigError> {
    let codes: Vec<String> = raw
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .map(str::to_owned)
        .collect();
    if codes.iter().any(|code| code == FALLBACK_TENANT) {
        return Err(ConfigError::InvalidValue { key: "TENANTS", value: raw.unwrap_or_default().to_owned() });
    }
    Ok(if codes.is_empty() { default_tenants() } else { codes })
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}


#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
