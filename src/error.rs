// src/error.rs
//! Error types for the API binding.

use thiserror::Error;

use crate::api::transport::ApiResponse;

/// Errors that can occur when talking to the API.
///
/// Only two kinds exist: a request that could not be built locally, and a
/// request that was handed to the transport but failed. Every failure is
/// returned as a value; nothing here retries, wraps the collaborator's
/// error with extra context, or panics.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request could not be constructed (malformed input, unreadable
    /// upload content). The transport was never called, so no response
    /// exists.
    #[error("Failed to build request for `{path}`: {reason}")]
    Construction { path: String, reason: String },

    /// The request was sent but failed: network error, non-success status,
    /// or an undecodable response body. When the service answered with a
    /// well-formed error response, it rides along for status inspection.
    #[error("Request to `{path}` failed: {reason}")]
    Transport {
        path: String,
        reason: String,
        response: Option<ApiResponse>,
    },
}

impl ApiError {
    /// Shorthand for a construction failure.
    pub fn construction(path: impl Into<String>, reason: impl Into<String>) -> Self {
        ApiError::Construction {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Shorthand for a transport failure, attaching the response if one
    /// arrived.
    pub fn transport(
        path: impl Into<String>,
        reason: impl Into<String>,
        response: Option<ApiResponse>,
    ) -> Self {
        ApiError::Transport {
            path: path.into(),
            reason: reason.into(),
            response,
        }
    }

    /// The raw response attached to a transport failure, if any.
    ///
    /// A `Some` here means the service produced a well-formed error
    /// response; `None` means the request never completed at all.
    pub fn response(&self) -> Option<&ApiResponse> {
        match self {
            ApiError::Transport { response, .. } => response.as_ref(),
            ApiError::Construction { .. } => None,
        }
    }

    /// HTTP status of the attached response, if any.
    pub fn status(&self) -> Option<u16> {
        self.response().map(|r| r.status)
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ApiError>;
