//! REST client configuration.

use thiserror::Error;

/// Environment variable holding the backend base URL
pub const BASE_URL_ENV: &str = "BOOKSTALL_API_URL";

/// Errors raised while building an [`ApiConfig`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The `BOOKSTALL_API_URL` environment variable is not set
    #[error("Missing {BASE_URL_ENV} environment variable")]
    MissingBaseUrl,
}

/// Connection settings for the storefront backend
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Creates a config pointing at the given base URL
    ///
    /// A trailing slash is stripped so endpoint paths can be joined verbatim.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// Creates a config from the `BOOKSTALL_API_URL` environment variable
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingBaseUrl`] if the variable is not set.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = std::env::var(BASE_URL_ENV).map_err(|_| ConfigError::MissingBaseUrl)?;
        Ok(Self::new(base_url))
    }

    /// The backend base URL, without a trailing slash
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_stripped() {
        let config = ApiConfig::new("http://localhost:3000/");
        assert_eq!(config.base_url(), "http://localhost:3000");
    }

    #[test]
    fn plain_url_is_kept() {
        let config = ApiConfig::new("https://bookstall.example");
        assert_eq!(config.base_url(), "https://bookstall.example");
    }
}
