//! Blocking client for the GeoDB Cities REST API.
//!
//! One [`GeoDbClient`] owns one `ureq` agent (connection pool). Every endpoint
//! method formats a path, forwards the caller's filters as query parameters
//! and hands back the [`ApiResponse`] untouched.
//!
//! Endpoint methods are grouped by resource family in [`geo`] and [`locale`];
//! the path templates themselves live in [`paths`].

pub mod config;
mod geo;
mod locale;
pub mod paths;
pub mod response;
pub mod types;

use std::fmt;

use tracing::{debug, Span};

pub use config::{ClientConfig, API_HOST_HEADER, API_KEY_HEADER, DEFAULT_API_HOST};
pub use response::ApiResponse;
pub use types::{ClientError, Headers, Method, PreparedRequest, QueryParams, RequestOptions, Result};

const DOCS_URL: &str = "https://wirefreethought.github.io/geodb-cities-api-docs/";

/// GeoDB Cities API client.
pub struct GeoDbClient {
    config: ClientConfig,
    base_url: String,
    default_headers: Headers,
    /// `None` once the client has been closed.
    agent: Option<ureq::Agent>,
    span: Span,
}

impl GeoDbClient {
    /// Client for the default RapidAPI host.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::from_config(ClientConfig::new(api_key))
    }

    pub fn with_host(api_key: impl Into<String>, api_host: impl Into<String>) -> Self {
        Self::from_config(ClientConfig::new(api_key).with_host(api_host))
    }

    pub fn from_config(config: ClientConfig) -> Self {
        let base_url = config.base_url();
        let default_headers = Headers::new()
            .with(API_KEY_HEADER, config.api_key())
            .with(API_HOST_HEADER, config.api_host());

        let mut builder = ureq::AgentBuilder::new().user_agent(config.user_agent());
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        let span = tracing::info_span!("geodb_client", host = %config.api_host());

        Self {
            config,
            base_url,
            default_headers,
            agent: Some(builder.build()),
            span,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn api_host(&self) -> &str {
        self.config.api_host()
    }

    pub fn default_headers(&self) -> &Headers {
        &self.default_headers
    }

    pub fn is_closed(&self) -> bool {
        self.agent.is_none()
    }

    /// Release the connection pool.
    ///
    /// Returns `true` the first time and `false` on every later call. Dropping
    /// the client closes it if this was never called.
    pub fn close(&mut self) -> bool {
        match self.agent.take() {
            Some(agent) => {
                drop(agent);
                debug!(parent: &self.span, "connection pool released");
                true
            }
            None => false,
        }
    }

    /// Resolve URL and headers for a request without sending it.
    ///
    /// Caller headers are overlaid by the default headers, so the API key and
    /// host can never be replaced per call.
    pub fn prepare(&self, method: Method, path: &str, options: RequestOptions) -> PreparedRequest {
        let url = format!("{}/{}", self.base_url, path);
        let headers = match &options.headers {
            Some(headers) => headers.merged_with(&self.default_headers),
            None => self.default_headers.clone(),
        };

        PreparedRequest {
            method,
            url,
            headers,
            params: options.params.unwrap_or_default(),
            body: options.body,
            timeout: options.timeout,
        }
    }

    /// Send a request and return the response as received.
    ///
    /// Only transport failures are errors. Any HTTP status, including 4xx and
    /// 5xx, comes back as `Ok`.
    pub fn request(&self, method: Method, path: &str, options: RequestOptions) -> Result<ApiResponse> {
        let agent = self.agent.as_ref().ok_or(ClientError::Closed)?;
        let prepared = self.prepare(method, path, options);
        let _entered = self.span.enter();

        debug!(
            method = %prepared.method,
            url = %prepared.url,
            headers = ?redact(&prepared.headers),
            params = ?prepared.params,
            body = prepared.body.as_deref().unwrap_or(""),
            "sending request"
        );

        let mut request = agent.request(prepared.method.as_str(), &prepared.url);
        for (name, value) in prepared.headers.iter() {
            request = request.set(name, value);
        }
        for (name, value) in prepared.params.iter() {
            request = request.query(name, value);
        }
        if let Some(timeout) = prepared.timeout {
            request = request.timeout(timeout);
        }

        let result = match prepared.body.as_deref() {
            Some(body) => request.send_string(body),
            None => request.call(),
        };
        let response = match result {
            Ok(response) => response,
            Err(ureq::Error::Status(_, response)) => response,
            Err(ureq::Error::Transport(transport)) => {
                return Err(ClientError::Transport(Box::new(transport)))
            }
        };
        let response = ApiResponse::from_ureq(response)?;

        debug!(
            url = response.url(),
            status = response.status(),
            headers = ?response.headers(),
            body = %response.text(),
            "received response"
        );

        Ok(response)
    }

    /// `request` with the method fixed to GET.
    pub fn get(&self, path: &str, options: RequestOptions) -> Result<ApiResponse> {
        self.request(Method::Get, path, options)
    }

    fn get_with_params(&self, path: &str, params: &QueryParams) -> Result<ApiResponse> {
        self.get(path, RequestOptions::new().params(params.clone()))
    }

    fn get_plain(&self, path: &str) -> Result<ApiResponse> {
        self.get(path, RequestOptions::new())
    }
}

impl Drop for GeoDbClient {
    fn drop(&mut self) {
        self.close();
    }
}

impl fmt::Display for GeoDbClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Client for {}", DOCS_URL)
    }
}

impl fmt::Debug for GeoDbClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeoDbClient")
            .field("base_url", &self.base_url)
            .field("api_host", &self.config.api_host())
            .field("closed", &self.is_closed())
            .finish()
    }
}

fn redact(headers: &Headers) -> Headers {
    headers
        .iter()
        .map(|(name, value)| {
            if name.eq_ignore_ascii_case(API_KEY_HEADER) {
                (name, "<redacted>")
            } else {
                (name, value)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_new_uses_default_host() {
        let client = GeoDbClient::new("key");
        assert_eq!(client.base_url(), "https://wft-geo-db.p.rapidapi.com/v1");
        assert_eq!(client.api_host(), "wft-geo-db.p.rapidapi.com");
    }

    #[test]
    fn test_with_host() {
        let client = GeoDbClient::with_host("key", "geo.example.com");
        assert_eq!(client.base_url(), "https://geo.example.com/v1");
        assert_eq!(client.default_headers().get(API_HOST_HEADER), Some("geo.example.com"));
    }

    #[test]
    fn test_default_headers() {
        let client = GeoDbClient::new("abc123");
        let headers = client.default_headers();
        assert_eq!(headers.len(), 2);
        assert_eq!(headers.get("X-RapidAPI-Key"), Some("abc123"));
        assert_eq!(headers.get("X-RapidAPI-Host"), Some(DEFAULT_API_HOST));
    }

    #[test]
    fn test_prepare_joins_url_with_single_slash() {
        let client = GeoDbClient::new("key");
        let req = client.prepare(Method::Get, "geo/cities/123", RequestOptions::new());
        assert_eq!(req.url, "https://wft-geo-db.p.rapidapi.com/v1/geo/cities/123");
        assert_eq!(req.method, Method::Get);
        assert!(req.params.is_empty());
        assert!(req.body.is_none());
    }

    #[test]
    fn test_prepare_defaults_only() {
        let client = GeoDbClient::new("key");
        let req = client.prepare(Method::Get, "geo/cities", RequestOptions::new());
        assert_eq!(&req.headers, client.default_headers());
    }

    #[test]
    fn test_prepare_default_headers_win() {
        let client = GeoDbClient::new("real-key");
        let caller = Headers::new()
            .with("x-rapidapi-key", "spoofed")
            .with("X-RapidAPI-Host", "evil.example.com")
            .with("Accept-Language", "fr");
        let req = client.prepare(Method::Get, "geo/cities", RequestOptions::new().headers(caller));

        assert_eq!(req.headers.len(), 3);
        assert_eq!(req.headers.get("X-RapidAPI-Key"), Some("real-key"));
        assert_eq!(req.headers.get("X-RapidAPI-Host"), Some(DEFAULT_API_HOST));
        assert_eq!(req.headers.get("accept-language"), Some("fr"));
    }

    #[test]
    fn test_prepare_carries_params_and_options() {
        let client = GeoDbClient::new("key");
        let params = QueryParams::new().with("limit", 5).with("namePrefix", "San");
        let opts = RequestOptions::new()
            .params(params.clone())
            .body("{}")
            .timeout(Duration::from_secs(2));
        let req = client.prepare(Method::Post, "geo/cities", opts);

        assert_eq!(req.method, Method::Post);
        assert_eq!(req.params, params);
        assert_eq!(req.body.as_deref(), Some("{}"));
        assert_eq!(req.timeout, Some(Duration::from_secs(2)));
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut client = GeoDbClient::new("key");
        assert!(!client.is_closed());
        assert!(client.close());
        assert!(client.is_closed());
        assert!(!client.close());
        assert!(!client.close());
    }

    #[test]
    fn test_request_after_close_fails() {
        let mut client = GeoDbClient::new("key");
        client.close();
        let err = client.get_cities(&QueryParams::new()).unwrap_err();
        assert!(matches!(err, ClientError::Closed));
    }

    #[test]
    fn test_prepare_after_close_still_works() {
        let mut client = GeoDbClient::new("key");
        client.close();
        let req = client.prepare(Method::Get, "geo/places", RequestOptions::new());
        assert!(req.url.ends_with("/v1/geo/places"));
    }

    #[test]
    fn test_connection_refused_is_transport_error() {
        let config = ClientConfig::new("key")
            .with_base_url("http://127.0.0.1:1/v1")
            .with_timeout(Duration::from_secs(2));
        let client = GeoDbClient::from_config(config);
        let err = client.get_city_details(1, &QueryParams::new()).unwrap_err();
        assert!(matches!(err, ClientError::Transport(_)));
    }

    #[test]
    fn test_display() {
        let client = GeoDbClient::new("key");
        assert_eq!(
            client.to_string(),
            "Client for https://wirefreethought.github.io/geodb-cities-api-docs/"
        );
    }

    #[test]
    fn test_debug_hides_key() {
        let client = GeoDbClient::new("hidden-key");
        assert!(!format!("{:?}", client).contains("hidden-key"));
    }

    #[test]
    fn test_redact() {
        let headers = Headers::new()
            .with(API_KEY_HEADER, "secret")
            .with(API_HOST_HEADER, "host");
        let redacted = redact(&headers);
        assert_eq!(redacted.get(API_KEY_HEADER), Some("<redacted>"));
        assert_eq!(redacted.get(API_HOST_HEADER), Some("host"));
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GeoDbClient>();
    }
}
