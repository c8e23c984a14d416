//! Shared test fixtures: a stub gateway, a local fake of the Gemini API,
//! and a multipart body builder.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::Body,
    extract::State,
    http::{HeaderMap, Request, StatusCode},
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde_json::{json, Value};

use poetcam::{ComposedPrompt, ImagePayload, PoemGateway, PoetryError};

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("poetcam_server=debug")
        .with_test_writer()
        .try_init();
}

// ============================================
// Stub Gateway
// ============================================

/// Records what it was asked and answers with a canned result
pub struct StubGateway {
    reply: Result<String, PoetryError>,
    pub calls: AtomicUsize,
    pub last_prompt: Mutex<Option<String>>,
    pub last_mime: Mutex<Option<String>>,
}

impl StubGateway {
    pub fn replying(text: &str) -> Self {
        Self::with_result(Ok(text.to_string()))
    }

    pub fn failing(err: PoetryError) -> Self {
        Self::with_result(Err(err))
    }

    fn with_result(reply: Result<String, PoetryError>) -> Self {
        Self {
            reply,
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
            last_mime: Mutex::new(None),
        }
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt.lock().unwrap().clone()
    }

    pub fn last_mime(&self) -> Option<String> {
        self.last_mime.lock().unwrap().clone()
    }
}

#[async_trait]
impl PoemGateway for StubGateway {
    async fn generate(
        &self,
        image: &ImagePayload,
        prompt: &ComposedPrompt,
    ) -> Result<String, PoetryError> {
        image.validate()?;
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_prompt.lock().unwrap() = Some(prompt.as_str().to_string());
        *self.last_mime.lock().unwrap() = Some(image.mime_type().to_string());
        self.reply.clone()
    }

    fn provider_name(&self) -> &str {
        "stub"
    }

    fn model_id(&self) -> &str {
        "stub-model"
    }
}

// ============================================
// Fake Gemini API
// ============================================

#[derive(Clone)]
pub enum FakeReply {
    /// Describe the received image and prompt back as the poem text
    Echo,
    /// Fixed status and JSON body
    Status(StatusCode, Value),
}

#[derive(Clone)]
struct FakeState {
    reply: FakeReply,
    hits: Arc<AtomicUsize>,
    last_key: Arc<Mutex<Option<String>>>,
}

pub struct FakeGemini {
    pub base_url: String,
    pub hits: Arc<AtomicUsize>,
    last_key: Arc<Mutex<Option<String>>>,
}

impl FakeGemini {
    pub fn last_api_key(&self) -> Option<String> {
        self.last_key.lock().unwrap().clone()
    }
}

/// Serve a fake `generateContent` on an ephemeral local port
pub async fn spawn_fake_gemini(reply: FakeReply) -> FakeGemini {
    let state = FakeState {
        reply,
        hits: Arc::new(AtomicUsize::new(0)),
        last_key: Arc::new(Mutex::new(None)),
    };
    let hits = state.hits.clone();
    let last_key = state.last_key.clone();

    let app = Router::new()
        .route("/v1beta/models/:call", post(fake_generate))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    FakeGemini {
        base_url: format!("http://{addr}/v1beta/models"),
        hits,
        last_key,
    }
}

async fn fake_generate(
    State(state): State<FakeState>,
    headers: HeaderMap,
    Json(request): Json<Value>,
) -> impl IntoResponse {
    state.hits.fetch_add(1, Ordering::SeqCst);
    *state.last_key.lock().unwrap() = headers
        .get("x-goog-api-key")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    match state.reply {
        FakeReply::Status(status, body) => (status, Json(body)),
        FakeReply::Echo => {
            let parts = &request["contents"][0]["parts"];
            let prompt = parts[0]["text"].as_str().unwrap_or_default();
            let inline = &parts[1]["inlineData"];
            let mime = inline["mimeType"].as_str().unwrap_or_default();
            let data = STANDARD
                .decode(inline["data"].as_str().unwrap_or_default())
                .unwrap_or_default();
            let first = data.first().copied().unwrap_or_default();

            let text = format!(
                "{mime} {} {first} {}\n\n— Echo Fake",
                data.len(),
                prompt.len()
            );
            (
                StatusCode::OK,
                Json(json!({"candidates": [{"content": {"parts": [{"text": text}]}}]})),
            )
        }
    }
}

// ============================================
// Multipart Builder
// ============================================

const BOUNDARY: &str = "poetcam-test-boundary";

#[derive(Default)]
pub struct FormBuilder {
    body: Vec<u8>,
}

impl FormBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
        self
    }

    pub fn file(mut self, name: &str, file_name: &str, content_type: &str, data: &[u8]) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\nContent-Type: {content_type}\r\n\r\n"
            )
            .as_bytes(),
        );
        self.body.extend_from_slice(data);
        self.body.extend_from_slice(b"\r\n");
        self
    }

    pub fn into_request(mut self, uri: &str) -> Request<Body> {
        self.body
            .extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(
                "content-type",
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(self.body))
            .unwrap()
    }
}
