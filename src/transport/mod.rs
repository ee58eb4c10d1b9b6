//! HTTP transport seam.
//!
//! The client builds a fully-formed [`HttpRequest`] and hands it to a
//! [`Transport`]. [`HttpTransport`] is the reqwest-backed implementation; tests
//! substitute their own to observe requests without touching the network.

mod http;

pub use http::HttpTransport;

use async_trait::async_trait;
use bytes::Bytes;
use url::Url;

/// Header carrying the API key. Its value is masked in `Debug` output.
pub const AUTH_HEADER: &str = "xi-api-key";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single outgoing request, already carrying every header and the encoded body.
#[derive(Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: Url,
    pub headers: Vec<(&'static str, String)>,
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    pub fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn header(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.headers.push((name, value.into()));
        self
    }

    pub fn body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }

    /// First value of a header, compared case-insensitively.
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

impl std::fmt::Debug for HttpRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let headers: Vec<(&str, &str)> = self
            .headers
            .iter()
            .map(|(k, v)| {
                if k.eq_ignore_ascii_case(AUTH_HEADER) {
                    (*k, "***")
                } else {
                    (*k, v.as_str())
                }
            })
            .collect();
        f.debug_struct("HttpRequest")
            .field("method", &self.method)
            .field("url", &self.url.as_str())
            .field("headers", &headers)
            .field("body_len", &self.body.as_ref().map(Vec::len))
            .finish()
    }
}

/// Status and fully-read body of a response.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Bytes,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == 200
    }

    /// Body as text, replacing invalid UTF-8.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

#[async_trait]
pub trait Transport: Send + Sync {
    /// Send one request and read the whole response body.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Transport error: {0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_debug_masks_api_key() {
        let url = Url::parse("https://api.elevenlabs.io/v1/voices").unwrap();
        let req = HttpRequest::new(Method::Get, url)
            .header("Xi-Api-Key", "sk_live_secret")
            .header("Accept", "audio/mpeg");
        let rendered = format!("{:?}", req);
        assert!(!rendered.contains("sk_live_secret"), "{}", rendered);
        assert!(rendered.contains("***"));
        assert!(rendered.contains("audio/mpeg"));
        assert_eq!(req.header_value("xi-api-key"), Some("sk_live_secret"));
    }

    #[test]
    fn test_response_text_is_lossy() {
        let resp = HttpResponse::new(500, vec![b'o', b'k', 0xff]);
        assert!(!resp.is_ok());
        assert_eq!(resp.text(), "ok\u{fffd}");
    }
}
