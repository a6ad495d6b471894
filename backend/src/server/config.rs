//! HTTP server configuration object and helpers.

use std::net::SocketAddr;
use std::time::Duration;

use holidays_api::settings::{HolidaysSettings, SettingsError};
use url::Url;

/// Resolved configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) api_url: Url,
    pub(crate) request_timeout: Duration,
    pub(crate) user_agent: String,
    pub(crate) max_lookback_years: Option<u32>,
}

impl ServerConfig {
    /// Resolve loaded settings into concrete server parameters.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] when a configured value does not parse.
    pub fn from_settings(settings: &HolidaysSettings) -> Result<Self, SettingsError> {
        Ok(Self {
            bind_addr: settings.bind_addr()?,
            api_url: settings.api_url()?,
            request_timeout: settings.request_timeout()?,
            user_agent: settings.user_agent().to_owned(),
            max_lookback_years: settings.max_lookback_years(),
        })
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
