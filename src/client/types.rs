//! Core types for the client: query parameters, headers, request options and errors.

use std::fmt;
use std::time::Duration;

use thiserror::Error;

/// HTTP method used by the shared request primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
            Self::Head => "HEAD",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered query filters forwarded verbatim to the API.
///
/// Insertion order is kept. Inserting a name that already exists replaces its
/// value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert: `QueryParams::new().with("limit", 5)`.
    pub fn with(mut self, name: impl Into<String>, value: impl fmt::Display) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl fmt::Display) {
        let name = name.into();
        let value = value.to_string();
        match self.pairs.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.pairs.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl<K: Into<String>, V: fmt::Display> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}

impl<K: Into<String>, V: fmt::Display, const N: usize> From<[(K, V); N]> for QueryParams {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

/// Ordered request headers with case-insensitive names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
    pairs: Vec<(String, String)>,
}

impl Headers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Set a header, replacing any existing header of the same name
    /// (ignoring ASCII case).
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self
            .pairs
            .iter_mut()
            .find(|(n, _)| n.eq_ignore_ascii_case(&name))
        {
            Some(slot) => *slot = (name, value),
            None => self.pairs.push((name, value)),
        }
    }

    /// Add a header without touching existing entries of the same name.
    /// Used for response headers, which may repeat (`Set-Cookie`, `Vary`).
    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((name.into(), value.into()));
    }

    /// First value for `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn get_all(&self, name: &str) -> Vec<&str> {
        self.pairs
            .iter()
            .filter(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
            .collect()
    }

    /// Overlay `other` on top of `self`; entries of `other` win on collision.
    pub fn merged_with(&self, other: &Headers) -> Headers {
        let mut merged = self.clone();
        for (name, value) in other.iter() {
            merged.insert(name, value);
        }
        merged
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Headers {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut headers = Self::new();
        for (k, v) in iter {
            headers.insert(k, v);
        }
        headers
    }
}

/// Per-call extras for [`GeoDbClient::request`](super::GeoDbClient::request).
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub headers: Option<Headers>,
    pub params: Option<QueryParams>,
    /// Request body, sent as-is. Ignored for GET by the API.
    pub body: Option<String>,
    /// Overrides the client's default timeout for this call only.
    pub timeout: Option<Duration>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn headers(mut self, headers: Headers) -> Self {
        self.headers = Some(headers);
        self
    }

    pub fn params(mut self, params: QueryParams) -> Self {
        self.params = Some(params);
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// A fully resolved request, ready to send.
#[derive(Debug, Clone)]
pub struct PreparedRequest {
    pub method: Method,
    pub url: String,
    pub headers: Headers,
    pub params: QueryParams,
    pub body: Option<String>,
    pub timeout: Option<Duration>,
}

/// Client errors.
///
/// Non-2xx responses are not errors; they come back as ordinary
/// [`ApiResponse`](super::ApiResponse) values.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("client is closed")]
    Closed,
    #[error("transport error: {0}")]
    Transport(#[from] Box<ureq::Transport>),
    #[error("failed to read response body: {0}")]
    Body(#[from] std::io::Error),
    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_keep_insertion_order() {
        let params = QueryParams::new()
            .with("namePrefix", "San")
            .with("limit", 5)
            .with("offset", 10);
        let names: Vec<&str> = params.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["namePrefix", "limit", "offset"]);
        assert_eq!(params.get("limit"), Some("5"));
    }

    #[test]
    fn test_params_insert_replaces_in_place() {
        let mut params = QueryParams::from([("limit", 5), ("offset", 0)]);
        params.insert("limit", 10);
        assert_eq!(params.len(), 2);
        assert_eq!(params.iter().next(), Some(("limit", "10")));
    }

    #[test]
    fn test_params_values_verbatim() {
        let params = QueryParams::new().with("location", "+40.7128-074.0060");
        assert_eq!(params.get("location"), Some("+40.7128-074.0060"));
    }

    #[test]
    fn test_params_names_case_sensitive() {
        let params = QueryParams::new().with("limit", 1).with("Limit", 2);
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn test_headers_case_insensitive() {
        let headers = Headers::new()
            .with("Accept", "application/json")
            .with("accept", "text/plain");
        assert_eq!(headers.len(), 1);
        assert_eq!(headers.get("ACCEPT"), Some("text/plain"));
    }

    #[test]
    fn test_headers_merge_other_wins() {
        let caller: Headers = [("x-rapidapi-key", "mine"), ("Accept", "application/json")]
            .into_iter()
            .collect();
        let defaults = Headers::new().with("X-RapidAPI-Key", "real");
        let merged = caller.merged_with(&defaults);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged.get("X-RapidAPI-Key"), Some("real"));
        assert_eq!(merged.get("accept"), Some("application/json"));
    }

    #[test]
    fn test_headers_append_keeps_repeats() {
        let mut headers = Headers::new().with("Content-Type", "application/json");
        headers.append("Set-Cookie", "a=1");
        headers.append("set-cookie", "b=2");
        assert_eq!(headers.len(), 3);
        assert_eq!(headers.get("SET-COOKIE"), Some("a=1"));
        assert_eq!(headers.get_all("Set-Cookie"), vec!["a=1", "b=2"]);
        assert!(headers.get_all("x-missing").is_empty());
    }

    #[test]
    fn test_method_display() {
        assert_eq!(Method::Get.to_string(), "GET");
        assert_eq!(Method::Delete.as_str(), "DELETE");
    }

    #[test]
    fn test_closed_error_message() {
        assert_eq!(ClientError::Closed.to_string(), "client is closed");
    }
}
