//! Service configuration loaded via OrthoConfig.
//!
//! Values come from `HOLIDAYS_*` environment variables, an optional config
//! file, or command-line flags; unset values fall back to the defaults below.

use std::net::SocketAddr;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use url::Url;

const DEFAULT_API_URL: &str = "https://date.nager.at/api/v3/PublicHolidays";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
const DEFAULT_BIND_ADDR: SocketAddr = SocketAddr::new(
    std::net::IpAddr::V4(std::net::Ipv4Addr::UNSPECIFIED),
    8080,
);
const DEFAULT_MAX_LOOKBACK_YEARS: u32 = 10;
const DEFAULT_USER_AGENT: &str = "holidays-api/0.1";

/// Errors raised while interpreting loaded settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// The holiday provider base URL did not parse.
    #[error("invalid holiday API URL {value:?}: {source}")]
    InvalidApiUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },
    /// The bind address was not `ip:port`.
    #[error("invalid bind address {value:?}: {source}")]
    InvalidBindAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
    /// The request timeout was zero.
    #[error("request timeout must be at least one second")]
    ZeroTimeout,
}

/// Configuration values for the holidays service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "HOLIDAYS")]
pub struct HolidaysSettings {
    /// Base URL of the public holiday provider.
    pub api_url: Option<String>,
    /// Per-request timeout for provider calls, in seconds.
    pub request_timeout_secs: Option<u64>,
    /// Socket address the HTTP server binds to.
    pub bind_addr: Option<String>,
    /// Earliest year offset the recent-holidays search may visit; 0 removes
    /// the bound.
    pub max_lookback_years: Option<u32>,
    /// User agent sent to the holiday provider.
    pub user_agent: Option<String>,
}

impl HolidaysSettings {
    /// Parsed provider base URL, falling back to the public Nager.Date API.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidApiUrl`] when the configured value is
    /// not an absolute URL.
    pub fn api_url(&self) -> Result<Url, SettingsError> {
        let raw = self.api_url.as_deref().unwrap_or(DEFAULT_API_URL);
        Url::parse(raw).map_err(|source| SettingsError::InvalidApiUrl {
            value: raw.to_owned(),
            source,
        })
    }

    /// Provider request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::ZeroTimeout`] for a zero timeout.
    pub fn request_timeout(&self) -> Result<Duration, SettingsError> {
        match self
            .request_timeout_secs
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS)
        {
            0 => Err(SettingsError::ZeroTimeout),
            secs => Ok(Duration::from_secs(secs)),
        }
    }

    /// Socket address for the HTTP listener.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidBindAddr`] when the value does not
    /// parse as `ip:port`.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        self.bind_addr.as_deref().map_or(Ok(DEFAULT_BIND_ADDR), |raw| {
            raw.parse().map_err(|source| SettingsError::InvalidBindAddr {
                value: raw.to_owned(),
                source,
            })
        })
    }

    /// Lookback bound for the recent-holidays search; `None` when unbounded.
    pub fn max_lookback_years(&self) -> Option<u32> {
        match self.max_lookback_years.unwrap_or(DEFAULT_MAX_LOOKBACK_YEARS) {
            0 => None,
            years => Some(years),
        }
    }

    pub fn user_agent(&self) -> &str {
        self.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT)
    }
}
