// Re-export needed modules for consumers and tests
pub mod api;
pub mod error;
pub mod models;

// Re-export main types for convenience
pub use api::transport::{
    ApiRequest, ApiResponse, Method, MultipartPayload, RequestBody, ShareFileRequest, Transport,
};
pub use api::users::{UserService, DEFAULT_MAX_RESULTS};
pub use error::{ApiError, Result};
pub use models::*;
