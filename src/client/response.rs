//! Pass-through response snapshot.

use std::borrow::Cow;
use std::io::Read;

use serde::de::DeserializeOwned;

use super::types::{ClientError, Headers};

/// The response as received: final URL, status, headers and body bytes.
///
/// Nothing is interpreted. A 404 or 429 is returned the same way as a 200;
/// callers decide what to do with the status. Repeated headers keep every
/// value, in arrival order.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    url: String,
    status: u16,
    status_text: String,
    headers: Headers,
    body: Vec<u8>,
}

impl ApiResponse {
    pub fn new(
        url: impl Into<String>,
        status: u16,
        status_text: impl Into<String>,
        headers: Headers,
        body: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            url: url.into(),
            status,
            status_text: status_text.into(),
            headers,
            body: body.into(),
        }
    }

    /// Read a `ureq` response to the end, without size limit or decoding.
    pub(crate) fn from_ureq(response: ureq::Response) -> Result<Self, ClientError> {
        let url = response.get_url().to_string();
        let status = response.status();
        let status_text = response.status_text().to_string();

        // `headers_names` repeats a name once per occurrence.
        let mut headers = Headers::new();
        let mut seen: Vec<String> = Vec::new();
        for name in response.headers_names() {
            if seen.iter().any(|s| s.eq_ignore_ascii_case(&name)) {
                continue;
            }
            for value in response.all(&name) {
                headers.append(name.as_str(), value);
            }
            seen.push(name);
        }

        let mut body = Vec::new();
        response.into_reader().read_to_end(&mut body)?;
        Ok(Self::new(url, status, status_text, headers, body))
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn status_text(&self) -> &str {
        &self.status_text
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    /// First value of a header, case-insensitive.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)
    }

    /// Raw body bytes, exactly as received.
    pub fn bytes(&self) -> &[u8] {
        &self.body
    }

    /// Body as text. Invalid UTF-8 sequences are replaced with U+FFFD;
    /// use [`bytes`](Self::bytes) for the exact payload.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.body
    }

    /// Decode the body as JSON into any deserializable type.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ClientError> {
        Ok(serde_json::from_slice(&self.body)?)
    }
}
