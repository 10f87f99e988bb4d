//! Client configuration: credentials, host and transport settings.

use std::fmt;
use std::time::Duration;

/// Default RapidAPI host serving GeoDB Cities.
pub const DEFAULT_API_HOST: &str = "wft-geo-db.p.rapidapi.com";

pub const API_KEY_HEADER: &str = "X-RapidAPI-Key";
pub const API_HOST_HEADER: &str = "X-RapidAPI-Host";

const DEFAULT_USER_AGENT: &str = concat!("geodb-cities/", env!("CARGO_PKG_VERSION"));

/// Settings used to build a [`GeoDbClient`](super::GeoDbClient).
#[derive(Clone)]
pub struct ClientConfig {
    api_key: String,
    api_host: String,
    /// Replaces `https://{host}/v1` when set (proxies, local test servers).
    base_url: Option<String>,
    timeout: Option<Duration>,
    user_agent: String,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_host: DEFAULT_API_HOST.to_string(),
            base_url: None,
            timeout: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    pub fn with_host(mut self, api_host: impl Into<String>) -> Self {
        self.api_host = api_host.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn api_host(&self) -> &str {
        &self.api_host
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// `https://{host}/v1`, or the override without a trailing slash.
    pub fn base_url(&self) -> String {
        match &self.base_url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => format!("https://{}/v1", self.api_host),
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("api_host", &self.api_host)
            .field("base_url", &self.base_url())
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
