// src/api/transport.rs
//! The seam between the API binding and the HTTP layer.
//!
//! This crate never speaks HTTP itself. A [`Transport`] implementation owns
//! the base URL, authentication, JSON and multipart encoding, and the
//! network exchange; the binding only describes requests and decodes
//! responses. The types here are the currency passed across that seam.

use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;

/// HTTP methods used by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of an [`ApiRequest`].
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Empty,
    /// A value the transport JSON-encodes when sending.
    Json(Value),
    /// A loaded file upload the transport multipart-encodes when sending.
    Multipart(MultipartPayload),
}

/// A file upload with its fields laid out but not yet encoded.
///
/// Boundary generation and the multipart wire layout belong to the
/// transport's HTTP layer, not to this crate.
#[derive(Debug, Clone, PartialEq)]
pub struct MultipartPayload {
    pub filename: String,
    pub content: Vec<u8>,
    pub message: Option<String>,
}

/// A transport-ready request.
///
/// `path` is relative to the transport's configured base API URL and
/// already carries any query string.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: RequestBody,
}

/// A raw response from the service.
///
/// A clone rides inside [`crate::ApiError::Transport`] when the service
/// answers with a non-success status.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub headers: HashMap<String, String>,
    pub body: Vec<u8>,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// A file to share with a user.
///
/// Constructed by the caller. The transport reads the file when building
/// the upload request, so an unreadable path surfaces there as a
/// construction error.
#[derive(Debug, Clone, PartialEq)]
pub struct ShareFileRequest {
    /// Local file whose contents are uploaded.
    pub path: PathBuf,
    /// Overrides the file's basename on the wire.
    pub filename: Option<String>,
    /// Optional message shown next to the file.
    pub message: Option<String>,
}

/// The narrow interface to the HTTP layer.
///
/// Implementations must be safe for concurrent use: the binding issues
/// requests from any number of tasks without coordinating them. Timeouts
/// and cancellation are the implementation's responsibility as well.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Build a request from a method, a path relative to the base API URL,
    /// and an optional body to be JSON-encoded. Failure is a construction
    /// error.
    fn new_request(&self, method: Method, path: &str, body: Option<Value>) -> Result<ApiRequest>;

    /// Build a multipart file-upload request. Reading the file and laying
    /// out the multipart fields is the implementation's job; unreadable
    /// file content is a construction error.
    fn new_file_upload_request(
        &self,
        method: Method,
        path: &str,
        share: &ShareFileRequest,
    ) -> Result<ApiRequest>;

    /// Execute a request.
    ///
    /// Network failures and non-success statuses are transport errors.
    /// When the service produced a response anyway, implementations attach
    /// it to the error so callers can tell "not found" from "network
    /// down".
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse>;
}
