//! Site configuration parsed from environment variables.
//!
//! Optional:
//! - `PORT`: local development port, default 3000. Used to recognize
//!   `*.localhost:<PORT>` hosts during host normalization.
//! - `BASE_DOMAIN`: production domain, default `reavsuite.com`
//! - `AUTH_API_PREFIX`: requests under this path are never rewritten,
//!   default `/api/auth`

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BASE_DOMAIN: &str = "reavsuite.com";
pub const DEFAULT_AUTH_API_PREFIX: &str = "/api/auth";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT {value:?}: expected an integer in 1..=65535")]
    InvalidPort { value: String },
    #[error("BASE_DOMAIN must not be empty")]
    EmptyBaseDomain,
    #[error("invalid AUTH_API_PREFIX {value:?}: must start with '/'")]
    InvalidAuthPrefix { value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub port: u16,
    pub base_domain: String,
    pub auth_api_prefix: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            base_domain: DEFAULT_BASE_DOMAIN.to_owned(),
            auth_api_prefix: DEFAULT_AUTH_API_PREFIX.to_owned(),
        }
    }
}

impl SiteConfig {
    /// Build typed config from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build typed config from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT").map(|v| v.trim().to_owned()) {
            None => DEFAULT_PORT,
            Some(v) if v.is_empty() => DEFAULT_PORT,
            Some(v) => match v.parse::<u16>() {
                Ok(port) if port != 0 => port,
                _ => return Err(ConfigError::InvalidPort { value: v }),
            },
        };

        let base_domain = lookup("BASE_DOMAIN")
            .unwrap_or_else(|| DEFAULT_BASE_DOMAIN.to_owned())
            .trim()
            .trim_matches('.')
            .to_ascii_lowercase();
        if base_domain.is_empty() {
            return Err(ConfigError::EmptyBaseDomain);
        }

        let auth_api_prefix = lookup("AUTH_API_PREFIX").unwrap_or_else(|| DEFAULT_AUTH_API_PREFIX.to_owned());
        if !auth_api_prefix.starts_with('/') {
            return Err(ConfigError::InvalidAuthPrefix { value: auth_api_prefix });
        }

        Ok(Self { port, base_domain, auth_api_prefix })
    }

    /// Whether `host` is the app subdomain, here or on `*.localhost:<port>`.
    #[must_use]
    pub fn is_app_host(&self, host: &str) -> bool {
        client::util::site::is_app_host(host, &self.base_domain, self.port)
    }

    /// Host served by the app (`app.reavsuite.com`).
    #[must_use]
    pub fn app_host(&self) -> String {
        format!("app.{}", self.base_domain)
    }
}
