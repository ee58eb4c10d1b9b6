//! Call-counting fake transport for client unit tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::client::ElevenLabsClient;
use crate::transport::{HttpRequest, HttpResponse, Transport, TransportError};

pub(crate) struct RecordingTransport {
    reply: Option<(u16, Vec<u8>)>,
    calls: AtomicUsize,
    requests: Mutex<Vec<HttpRequest>>,
}

impl RecordingTransport {
    pub fn ok(body: impl AsRef<[u8]>) -> Self {
        Self::status(200, body)
    }

    pub fn status(status: u16, body: impl AsRef<[u8]>) -> Self {
        Self {
            reply: Some((status, body.as_ref().to_vec())),
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Every send fails before a response exists.
    pub fn unreachable() -> Self {
        Self {
            reply: None,
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> HttpRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was sent")
    }

    pub fn last_json_body(&self) -> serde_json::Value {
        let body = self.last_request().body.expect("request had no body");
        serde_json::from_slice(&body).expect("body is not JSON")
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request);
        match &self.reply {
            Some((status, body)) => Ok(HttpResponse::new(*status, body.clone())),
            None => Err(TransportError::Other("connection refused".to_string())),
        }
    }
}

pub(crate) fn client_with(transport: RecordingTransport) -> (ElevenLabsClient, Arc<RecordingTransport>) {
    let transport = Arc::new(transport);
    let client = ElevenLabsClient::builder()
        .api_key("sk_test")
        .base_url("http://mock.test/v1")
        .transport(transport.clone())
        .build()
        .expect("client builds");
    (client, transport)
}

pub(crate) fn client_without_key(
    transport: RecordingTransport,
) -> (ElevenLabsClient, Arc<RecordingTransport>) {
    let transport = Arc::new(transport);
    let client = ElevenLabsClient::builder()
        .base_url("http://mock.test/v1")
        .transport(transport.clone())
        .build()
        .expect("client builds");
    (client, transport)
}
