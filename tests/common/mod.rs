// Common test utilities for integration tests
// This module contains the shared mock transport and helpers used by all
// integration tests; no test here ever touches the network

// Standard library imports
use std::collections::{HashMap, VecDeque};
use std::fs;
use std::path::PathBuf;
use std::sync::{Mutex, Once};

// External crate imports
use anyhow::{Context, Result};
use async_trait::async_trait;
use log::LevelFilter;
use serde_json::Value;
use tempfile::TempDir;

// Import the crate functionality
use hipchat::api::transport::{
    ApiRequest, ApiResponse, Method, MultipartPayload, RequestBody, ShareFileRequest, Transport,
};
use hipchat::error::ApiError;

// Initialize logging once
static INIT_LOGGER: Once = Once::new();

/// Set up the logger for the tests
pub fn setup_logging() {
    INIT_LOGGER.call_once(|| {
        env_logger::Builder::new()
            .filter_level(LevelFilter::Debug)
            .is_test(true)
            .init();
    });
}

/// Build a response with a JSON content type header.
pub fn json_response(status: u16, body: &str) -> ApiResponse {
    let mut headers = HashMap::new();
    headers.insert("content-type".to_string(), "application/json".to_string());
    ApiResponse {
        status,
        headers,
        body: body.as_bytes().to_vec(),
    }
}

/// What the mock transport's `execute` returns next.
pub enum MockReply {
    Ok(ApiResponse),
    Err(ApiError),
}

/// In-memory stand-in for the HTTP layer.
///
/// Records every request that reaches `execute` and replays scripted
/// replies in order. With `failing_construction`, request building itself
/// fails, for short-circuit tests.
pub struct MockTransport {
    executed: Mutex<Vec<ApiRequest>>,
    replies: Mutex<VecDeque<MockReply>>,
    fail_construction: bool,
}

impl MockTransport {
    pub fn new() -> Self {
        MockTransport {
            executed: Mutex::new(Vec::new()),
            replies: Mutex::new(VecDeque::new()),
            fail_construction: false,
        }
    }

    /// A transport that refuses to build any request.
    pub fn failing_construction() -> Self {
        MockTransport {
            fail_construction: true,
            ..Self::new()
        }
    }

    /// Queue a successful JSON response.
    pub fn reply_json(&self, status: u16, body: &str) {
        self.replies
            .lock()
            .unwrap()
            .push_back(MockReply::Ok(json_response(status, body)));
    }

    /// Queue a transport failure, carrying `response` when the service is
    /// supposed to have answered.
    pub fn reply_error(&self, path: &str, reason: &str, response: Option<ApiResponse>) {
        self.replies
            .lock()
            .unwrap()
            .push_back(MockReply::Err(ApiError::transport(path, reason, response)));
    }

    /// Requests that reached `execute`, in order.
    pub fn executed(&self) -> Vec<ApiRequest> {
        self.executed.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for MockTransport {
    fn new_request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> hipchat::Result<ApiRequest> {
        if self.fail_construction {
            return Err(ApiError::construction(path, "mock refuses to build requests"));
        }

        let body = match body {
            Some(value) => RequestBody::Json(value),
            None => RequestBody::Empty,
        };
        Ok(ApiRequest {
            method,
            path: path.to_string(),
            body,
        })
    }

    fn new_file_upload_request(
        &self,
        method: Method,
        path: &str,
        share: &ShareFileRequest,
    ) -> hipchat::Result<ApiRequest> {
        if self.fail_construction {
            return Err(ApiError::construction(path, "mock refuses to build requests"));
        }

        // Like a real transport, read the file here so an unreadable path
        // surfaces as a construction error
        let content = fs::read(&share.path).map_err(|e| {
            ApiError::construction(
                path,
                format!("unreadable file {}: {}", share.path.display(), e),
            )
        })?;
        let filename = match &share.filename {
            Some(name) => name.clone(),
            None => share
                .path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
        };

        Ok(ApiRequest {
            method,
            path: path.to_string(),
            body: RequestBody::Multipart(MultipartPayload {
                filename,
                content,
                message: share.message.clone(),
            }),
        })
    }

    async fn execute(&self, request: ApiRequest) -> hipchat::Result<ApiResponse> {
        self.executed.lock().unwrap().push(request);
        let reply = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .expect("Mock transport ran out of scripted replies");
        match reply {
            MockReply::Ok(response) => Ok(response),
            MockReply::Err(err) => Err(err),
        }
    }
}

/// Write `content` into a file in a fresh temp directory.
///
/// Returns the directory guard (keep it alive for the test's duration)
/// along with the file path.
pub fn temp_share_file(name: &str, content: &[u8]) -> Result<(TempDir, PathBuf)> {
    let dir = tempfile::tempdir().context("Failed to create temp dir")?;
    let path = dir.path().join(name);
    fs::write(&path, content).context("Failed to write temp share file")?;
    Ok((dir, path))
}
