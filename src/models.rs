use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Relation-name to URL map returned by the API for navigation.
///
/// The contents are passed through opaquely; unknown relations survive a
/// round trip untouched.
pub type Links = HashMap<String, String>;

/// A user's live chat presence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserPresence {
    pub status: String,
    /// Seconds the user has been idle.
    pub idle: u32,
    pub show: String,
    pub is_online: bool,
}

/// A member of the HipChat group.
///
/// Field names mirror the v2 API wire format exactly. Timestamps stay the
/// opaque strings the API returns; this crate never parses them. The API
/// omits fields for deleted and guest accounts, so every field falls back
/// to its zero value when absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub xmpp_jid: String,
    pub is_deleted: bool,
    pub name: String,
    pub last_active: String,
    pub title: String,
    pub presence: UserPresence,
    pub created: String,
    /// Stable identifier, unique within the group and never reused.
    pub id: u64,
    /// Short unique handle, usable as an alternate identifier in API paths.
    pub mention_name: String,
    pub is_group_admin: bool,
    pub timezone: String,
    pub is_guest: bool,
    pub email: String,
    pub photo_url: String,
    pub links: Links,
}

/// One page of users plus the pagination envelope.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Users {
    pub items: Vec<User>,
    /// Offset of `items[0]` in the full collection.
    pub start_index: u32,
    /// Page size the service applied; `items` never holds more than this.
    pub max_results: u32,
    pub links: Links,
}
