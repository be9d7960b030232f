//! Shared API client
//!
//! Every service call goes through [`ApiClient::send`]: base URL, JSON
//! headers, bearer token, query retries and the centralised error report.

use crate::config::AppConfig;
use crate::error::{ApiError, ErrorNotice, ErrorReporter, should_report};
use crate::web::{HttpRequest, HttpTransport};
use leptos::prelude::use_context;
use admindash_shared::protocol::ApiRequest;
use admindash_shared::{CONTENT_TYPE_JSON, HEADER_AUTHORIZATION, HEADER_CONTENT_TYPE};
use std::sync::{Arc, RwLock};

/// Bearer token shared by the client and the auth context.
#[derive(Debug, Clone, Default)]
pub struct SessionToken(Arc<RwLock<Option<String>>>);

impl SessionToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<String> {
        self.0.read().ok().and_then(|t| t.clone())
    }

    pub fn set(&self, token: Option<String>) {
        if let Ok(mut slot) = self.0.write() {
            *slot = token;
        }
    }
}

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    timeout_ms: u32,
    query_retries: u32,
    token: SessionToken,
    transport: Arc<dyn HttpTransport>,
    reporter: Arc<dyn ErrorReporter>,
}

impl ApiClient {
    pub fn new(
        config: &AppConfig,
        token: SessionToken,
        transport: Arc<dyn HttpTransport>,
        reporter: Arc<dyn ErrorReporter>,
    ) -> Self {
        Self {
            base_url: config.api_url.trim_end_matches('/').to_string(),
            timeout_ms: config.timeout_ms,
            query_retries: config.query_retries,
            token,
            transport,
            reporter,
        }
    }

    pub fn token(&self) -> &SessionToken {
        &self.token
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    fn build<R: ApiRequest>(&self, req: &R, path: &str) -> Result<HttpRequest, ApiError> {
        let mut http = HttpRequest::new(self.url(path), R::METHOD)
            .with_header(HEADER_CONTENT_TYPE, CONTENT_TYPE_JSON);

        if let Some(token) = self.token.get() {
            http = http.with_header(HEADER_AUTHORIZATION, &format!("Bearer {}", token));
        }

        if let Some(body) = req.body() {
            let body = serde_json::to_string(&body).map_err(|e| ApiError::Encode(e.to_string()))?;
            http = http.with_body(body);
        }

        Ok(http)
    }

    async fn attempt<R: ApiRequest>(&self, req: &R, path: &str) -> Result<R::Response, ApiError> {
        let http = self.build(req, path)?;
        let resp = self.transport.send(http, self.timeout_ms).await?;

        if !resp.ok() {
            return Err(ApiError::from_status(resp.status, &resp.body));
        }

        resp.json::<R::Response>()
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Sends one typed request.
    ///
    /// GET requests are retried `query_retries` times on transport errors and
    /// 5xx responses; everything else is single-attempt. A failure is reported
    /// once, after the last attempt.
    pub async fn send<R: ApiRequest>(&self, req: &R) -> Result<R::Response, ApiError> {
        let path = req.path();
        let attempts = if R::METHOD.is_query() {
            self.query_retries + 1
        } else {
            1
        };

        let mut attempt = 0;
        let result = loop {
            attempt += 1;
            match self.attempt(req, &path).await {
                Err(err) if attempt < attempts && err.is_retryable() => {
                    log::warn!(
                        "{} {} failed ({}), retry {}/{}",
                        R::METHOD.as_str(),
                        path,
                        err,
                        attempt,
                        attempts - 1
                    );
                }
                other => break other,
            }
        };

        if let Err(err) = &result {
            log::error!("{} {} failed: {}", R::METHOD.as_str(), path, err);
            if should_report(err, &path) {
                self.reporter.report(ErrorNotice::from_error(err));
            }
        }

        result
    }
}

pub fn use_api() -> ApiClient {
    use_context::<ApiClient>().expect("ApiClient should be provided")
}

#[cfg(test)]
pub(crate) mod tests;
