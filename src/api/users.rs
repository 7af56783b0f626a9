// src/api/users.rs
//! User resource operations (v2 API methods view_user, get_all_users and
//! share_file_with_user).

use std::sync::Arc;

use log::debug;

use crate::api::decode_json;
use crate::api::transport::{ApiResponse, Method, ShareFileRequest, Transport};
use crate::error::Result;
use crate::models::{User, Users};

/// Page size used when a caller passes `max == 0` to [`UserService::list`].
pub const DEFAULT_MAX_RESULTS: u32 = 100;

/// Access to the user-related methods of the API.
///
/// Stateless: holds only a shared reference to the injected transport,
/// whose lifecycle belongs to the caller. A single instance can be used
/// from any number of tasks concurrently.
pub struct UserService {
    client: Arc<dyn Transport>,
}

impl UserService {
    /// Create a service around an externally owned transport.
    pub fn new(client: Arc<dyn Transport>) -> Self {
        UserService { client }
    }

    /// Fetch a user's details.
    ///
    /// `id` is a numeric user ID or a mention name; it is forwarded to the
    /// API without local validation. On success the decoded user is
    /// returned next to the raw response for status and header inspection.
    pub async fn view(&self, id: &str) -> Result<(User, ApiResponse)> {
        let path = format!("user/{}", id);
        debug!("Viewing user `{}`", id);

        let request = self.client.new_request(Method::Get, &path, None)?;
        let response = self.client.execute(request).await?;

        let user = decode_json::<User>(&response, &path)?;
        Ok((user, response))
    }

    /// List users in the group.
    ///
    /// `start` is the offset into the full collection and `max` the page
    /// size, where 0 means [`DEFAULT_MAX_RESULTS`]. `guests` and `deleted`
    /// control whether guest and soft-deleted accounts are included.
    ///
    /// Only the items of the page are returned; callers wanting the next
    /// page rebuild the parameters themselves.
    // TODO: surface the pagination envelope so callers can follow the
    // service's own next/prev links instead of recomputing offsets.
    pub async fn list(
        &self,
        start: u32,
        max: u32,
        guests: bool,
        deleted: bool,
    ) -> Result<(Vec<User>, ApiResponse)> {
        let max = if max == 0 { DEFAULT_MAX_RESULTS } else { max };
        let path = format!(
            "user?start-index={}&max-results={}&include-guests={}&include-deleted={}",
            start, max, guests, deleted
        );
        debug!("Listing users: {}", path);

        let request = self.client.new_request(Method::Get, &path, None)?;
        let response = self.client.execute(request).await?;

        let users = decode_json::<Users>(&response, &path)?;
        Ok((users.items, response))
    }

    /// Send a file to the user specified by `id`.
    ///
    /// The multipart encoding is owned by the transport; this call only
    /// names the path and forwards the share description. The API returns
    /// no meaningful body here, so only the raw response comes back.
    pub async fn share_file(&self, id: &str, share: &ShareFileRequest) -> Result<ApiResponse> {
        let path = format!("user/{}/share/file", id);
        debug!("Sharing `{}` with user `{}`", share.path.display(), id);

        let request = self
            .client
            .new_file_upload_request(Method::Post, &path, share)?;
        self.client.execute(request).await
    }
}
