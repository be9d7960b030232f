//! HTTP transport
//!
//! `HttpTransport` is the seam between the API client and the browser.
//! `FetchTransport` talks to `window.fetch` directly through `web_sys`; tests
//! plug in their own implementation.

use admindash_shared::protocol::HttpMethod;
use serde::de::DeserializeOwned;
use thiserror::Error;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{AbortSignal, Headers, Request, RequestInit, Response};

/// Transport-level failures. HTTP error statuses are not errors at this layer.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HttpError {
    #[error("failed to build request: {0}")]
    RequestBuild(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("request timed out after {0} ms")]
    Timeout(u32),
    #[error("failed to read response body: {0}")]
    Body(String),
}

/// Outgoing request.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub url: String,
    pub method: HttpMethod,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn new(url: impl Into<String>, method: HttpMethod) -> Self {
        Self {
            url: url.into(),
            method,
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn with_header(mut self, key: &str, value: &str) -> Self {
        self.headers.push((key.to_string(), value.to_string()));
        self
    }

    pub fn with_body(mut self, body: String) -> Self {
        self.body = Some(body);
        self
    }

    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }
}

/// Buffered response.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    /// 2xx
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}

/// (?Send) because the browser futures are not `Send`.
#[async_trait::async_trait(?Send)]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, req: HttpRequest, timeout_ms: u32) -> Result<HttpResponse, HttpError>;
}

/// `window.fetch` transport.
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

impl FetchTransport {
    fn build(req: &HttpRequest, timeout_ms: u32) -> Result<Request, HttpError> {
        let headers = Headers::new()
            .map_err(|e| HttpError::RequestBuild(format!("Headers: {:?}", e)))?;
        for (key, value) in &req.headers {
            headers
                .set(key, value)
                .map_err(|e| HttpError::RequestBuild(format!("header {}: {:?}", key, e)))?;
        }

        let opts = RequestInit::new();
        opts.set_method(req.method.as_str());
        opts.set_headers(&headers.into());
        if timeout_ms > 0 {
            let signal = AbortSignal::timeout_with_u32(timeout_ms);
            opts.set_signal(Some(&signal));
        }
        if let Some(body) = &req.body {
            opts.set_body(&JsValue::from_str(body));
        }

        Request::new_with_str_and_init(&req.url, &opts)
            .map_err(|e| HttpError::RequestBuild(format!("{:?}", e)))
    }
}

fn is_timeout(err: &JsValue) -> bool {
    err.dyn_ref::<js_sys::Error>()
        .map(|e| {
            let name = String::from(e.name());
            name == "TimeoutError" || name == "AbortError"
        })
        .unwrap_or(false)
}

#[async_trait::async_trait(?Send)]
impl HttpTransport for FetchTransport {
    async fn send(&self, req: HttpRequest, timeout_ms: u32) -> Result<HttpResponse, HttpError> {
        let request = Self::build(&req, timeout_ms)?;

        let window =
            web_sys::window().ok_or_else(|| HttpError::Network("no window object".to_string()))?;

        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| {
                if is_timeout(&e) {
                    HttpError::Timeout(timeout_ms)
                } else {
                    HttpError::Network(format!("{:?}", e))
                }
            })?;

        let response: Response = resp_value
            .dyn_into()
            .map_err(|e| HttpError::Body(format!("not a Response: {:?}", e)))?;

        let status = response.status();
        let promise = response
            .text()
            .map_err(|e| HttpError::Body(format!("{:?}", e)))?;
        let text = JsFuture::from(promise)
            .await
            .map_err(|e| HttpError::Body(format!("{:?}", e)))?;
        let body = text
            .as_string()
            .ok_or_else(|| HttpError::Body("body is not a string".to_string()))?;

        Ok(HttpResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_lookup_is_case_insensitive() {
        let req = HttpRequest::new("https://x/y", HttpMethod::Get)
            .with_header("Authorization", "Bearer t");
        assert_eq!(req.header("authorization"), Some("Bearer t"));
        assert_eq!(req.header("content-type"), None);
    }

    #[test]
    fn response_ok_range() {
        let ok = HttpResponse {
            status: 204,
            body: String::new(),
        };
        let not_found = HttpResponse {
            status: 404,
            body: String::new(),
        };
        assert!(ok.ok());
        assert!(!not_found.ok());
    }
}
