//! GitLab API request and response models.

use serde::{Deserialize, Serialize};

/// A project hook as returned by `GET /projects/{id}/hooks`.
#[derive(Debug, Deserialize)]
pub struct ProjectHook {
    /// Numeric hook ID.
    pub id: u64,
    /// The target URL the hook notifies.
    pub url: String,
    /// Whether push events are subscribed.
    #[serde(default)]
    pub push_events: bool,
    /// Whether merge-request events are subscribed.
    #[serde(default)]
    pub merge_requests_events: bool,
}

/// Request body for `POST /projects/{id}/hooks`.
#[derive(Debug, Serialize)]
pub struct CreateHookBody {
    /// The target URL to notify.
    pub url: String,
    /// Shared secret, sent back in the `X-Gitlab-Token` header.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Subscribe to push events.
    pub push_events: bool,
    /// Subscribe to merge-request events.
    pub merge_requests_events: bool,
}
