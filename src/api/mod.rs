// src/api/mod.rs
//! HipChat v2 API operations, organized by resource.
//!
//! `users` is the only resource covered so far; `transport` holds the seam
//! every resource goes through.

use log::warn;
use serde::de::DeserializeOwned;

use crate::error::{ApiError, Result};

pub mod transport;
pub mod users;

// Re-export the seam types alongside the services that use them
pub use transport::{ApiRequest, ApiResponse, Method, RequestBody, ShareFileRequest, Transport};
pub use users::UserService;

/// Decode a JSON response body into `T`.
///
/// A malformed or mismatched body is a transport-kind failure; the raw
/// response stays attached so the caller can still inspect what the
/// service actually sent.
pub(crate) fn decode_json<T: DeserializeOwned>(response: &ApiResponse, path: &str) -> Result<T> {
    serde_json::from_slice(&response.body).map_err(|e| {
        warn!("Undecodable response body from `{}`: {}", path, e);
        ApiError::transport(
            path,
            format!("undecodable response body: {}", e),
            Some(response.clone()),
        )
    })
}
