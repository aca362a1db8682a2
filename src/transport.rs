use std::{fmt, time::Duration};

use reqwest::blocking;

use crate::error::BoxError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Account name and API key, sent as HTTP basic auth.
#[derive(Clone)]
pub struct Credentials {
    pub user: String,
    pub key: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("user", &self.user)
            .field("key", &"[redacted]")
            .finish()
    }
}

/// A fully built call against the service. `url` never contains credentials.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub params: Vec<(String, String)>,
    pub credentials: Credentials,
}

impl ApiRequest {
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs one blocking round trip. Implement this to swap the HTTP stack
/// or to script responses in tests.
pub trait Transport {
    fn execute(&self, request: &ApiRequest) -> Result<HttpResponse, BoxError>;
}

/// Default transport on top of `reqwest::blocking`.
pub struct HttpTransport {
    http: blocking::Client,
}

impl HttpTransport {
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = blocking::Client::builder().timeout(timeout).build()?;
        Ok(Self { http })
    }
}

impl Transport for HttpTransport {
    fn execute(&self, request: &ApiRequest) -> Result<HttpResponse, BoxError> {
        let builder = self
            .http
            .request(request.method.into(), &request.url)
            .basic_auth(&request.credentials.user, Some(&request.credentials.key));

        let builder = match request.method {
            Method::Get => builder.query(&request.params),
            _ => builder.form(&request.params),
        };

        let response = builder.send()?;
        let status = response.status().as_u16();
        let body = response.text()?;
        Ok(HttpResponse { status, body })
    }
}
