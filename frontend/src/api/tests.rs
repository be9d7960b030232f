use super::*;
use crate::web::{HttpError, HttpResponse};
use admindash_shared::protocol::{GetProduct, LoginRequest, UpdateProduct};
use admindash_shared::{Credentials, ProductDraft};
use futures::executor::block_on;
use pretty_assertions::assert_eq;
use std::collections::VecDeque;
use std::sync::Mutex;

// =========================================================
// Test doubles
// =========================================================

#[derive(Default)]
pub(crate) struct MockTransport {
    replies: Mutex<VecDeque<Result<HttpResponse, HttpError>>>,
    pub(crate) sent: Mutex<Vec<HttpRequest>>,
}

impl MockTransport {
    pub(crate) fn reply(self, status: u16, body: &str) -> Self {
        self.push(Ok(HttpResponse {
            status,
            body: body.to_string(),
        }))
    }

    pub(crate) fn fail(self, err: HttpError) -> Self {
        self.push(Err(err))
    }

    fn push(self, reply: Result<HttpResponse, HttpError>) -> Self {
        self.replies.lock().unwrap().push_back(reply);
        self
    }

    pub(crate) fn sent(&self) -> Vec<HttpRequest> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait::async_trait(?Send)]
impl HttpTransport for MockTransport {
    async fn send(&self, req: HttpRequest, _timeout_ms: u32) -> Result<HttpResponse, HttpError> {
        self.sent.lock().unwrap().push(req);
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(HttpError::Network("no scripted reply".to_string())))
    }
}

#[derive(Default)]
pub(crate) struct RecordingReporter {
    pub(crate) notices: Mutex<Vec<ErrorNotice>>,
}

impl ErrorReporter for RecordingReporter {
    fn report(&self, notice: ErrorNotice) {
        self.notices.lock().unwrap().push(notice);
    }
}

pub(crate) fn client(
    transport: MockTransport,
) -> (ApiClient, Arc<MockTransport>, Arc<RecordingReporter>) {
    let transport = Arc::new(transport);
    let reporter = Arc::new(RecordingReporter::default());
    let api = ApiClient::new(
        &AppConfig::default(),
        SessionToken::new(),
        transport.clone(),
        reporter.clone(),
    );
    (api, transport, reporter)
}

const PRODUCT: &str = r#"{"id":1,"title":"Essence Mascara","price":9.99,"stock":5,"category":"beauty"}"#;

// =========================================================
// Tests
// =========================================================

#[test]
fn joins_base_url_and_sets_json_header() {
    let (api, transport, _) = client(MockTransport::default().reply(200, PRODUCT));

    let product = block_on(api.send(&GetProduct { id: 1 })).unwrap();
    assert_eq!(product.title, "Essence Mascara");

    let sent = transport.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].url, "https://dummyjson.com/products/1");
    assert_eq!(sent[0].header("Content-Type"), Some("application/json"));
    assert_eq!(sent[0].header("Authorization"), None);
    assert_eq!(sent[0].body, None);
}

#[test]
fn bearer_token_follows_the_shared_session() {
    let (api, transport, _) = client(
        MockTransport::default()
            .reply(200, PRODUCT)
            .reply(200, PRODUCT),
    );

    api.token().set(Some("abc".to_string()));
    block_on(api.send(&GetProduct { id: 1 })).unwrap();
    api.token().set(None);
    block_on(api.send(&GetProduct { id: 1 })).unwrap();

    let sent = transport.sent();
    assert_eq!(sent[0].header("Authorization"), Some("Bearer abc"));
    assert_eq!(sent[1].header("Authorization"), None);
}

#[test]
fn mutation_body_is_serialised() {
    let (api, transport, _) = client(MockTransport::default().reply(200, PRODUCT));
    let patch = ProductDraft {
        title: "Renamed".to_string(),
        ..ProductDraft::default()
    };

    block_on(api.send(&UpdateProduct { id: 1, patch })).unwrap();

    let sent = transport.sent();
    assert_eq!(sent[0].method.as_str(), "PUT");
    let body: serde_json::Value = serde_json::from_str(sent[0].body.as_deref().unwrap()).unwrap();
    assert_eq!(body["title"], "Renamed");
}

#[test]
fn get_is_retried_once_then_succeeds() {
    let (api, transport, reporter) = client(
        MockTransport::default()
            .fail(HttpError::Network("reset".to_string()))
            .reply(200, PRODUCT),
    );

    assert!(block_on(api.send(&GetProduct { id: 1 })).is_ok());
    assert_eq!(transport.sent().len(), 2);
    assert!(reporter.notices.lock().unwrap().is_empty());
}

#[test]
fn exhausted_retries_report_once() {
    let (api, transport, reporter) = client(
        MockTransport::default()
            .reply(503, r#"{"message":"Service unavailable"}"#)
            .reply(503, r#"{"message":"Service unavailable"}"#),
    );

    let err = block_on(api.send(&GetProduct { id: 1 })).unwrap_err();
    assert_eq!(err.status(), Some(503));
    assert_eq!(transport.sent().len(), 2);
    assert_eq!(
        *reporter.notices.lock().unwrap(),
        vec![ErrorNotice {
            title: "Error 503".to_string(),
            description: "Service unavailable".to_string(),
        }]
    );
}

#[test]
fn client_errors_are_not_retried() {
    let (api, transport, reporter) =
        client(MockTransport::default().reply(404, r#"{"message":"Product with id '9' not found"}"#));

    let err = block_on(api.send(&GetProduct { id: 9 })).unwrap_err();
    assert_eq!(err.user_message(), "Product with id '9' not found");
    assert_eq!(transport.sent().len(), 1);
    assert_eq!(reporter.notices.lock().unwrap().len(), 1);
}

#[test]
fn mutations_are_single_attempt() {
    let (api, transport, _) = client(MockTransport::default().reply(500, "{}").reply(200, PRODUCT));

    let update = UpdateProduct {
        id: 1,
        patch: ProductDraft::default(),
    };
    assert!(block_on(api.send(&update)).is_err());
    assert_eq!(transport.sent().len(), 1);
}

#[test]
fn rejected_login_is_not_reported() {
    let (api, _, reporter) = client(
        MockTransport::default().reply(401, r#"{"message":"Invalid credentials"}"#),
    );

    let login = LoginRequest(Credentials {
        username: "emilys".to_string(),
        password: "wrong".to_string(),
        expires_in_mins: None,
    });
    let err = block_on(api.send(&login)).unwrap_err();
    assert_eq!(err.server_message(), Some("Invalid credentials"));
    assert!(reporter.notices.lock().unwrap().is_empty());
}

#[test]
fn malformed_body_is_a_decode_error() {
    let (api, _, reporter) = client(MockTransport::default().reply(200, "not json"));

    let err = block_on(api.send(&GetProduct { id: 1 })).unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
    assert_eq!(reporter.notices.lock().unwrap()[0].title, "Error ");
}
