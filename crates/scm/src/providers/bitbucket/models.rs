//! Bitbucket API request and response models.

use serde::{Deserialize, Serialize};

/// Paged envelope returned by Bitbucket collection endpoints.
#[derive(Debug, Deserialize)]
pub struct Paged<T> {
    /// Items on this page.
    pub values: Vec<T>,
}

/// A webhook subscription as returned by
/// `GET /repositories/{workspace}/{repo}/hooks`.
#[derive(Debug, Deserialize)]
pub struct HookResource {
    /// Hook UUID, braces included (e.g. `{1f4a8b...}`).
    pub uuid: String,
    /// The target URL the hook notifies.
    pub url: String,
    /// Subscribed event names.
    #[serde(default)]
    pub events: Vec<String>,
}

/// Request body for `POST /repositories/{workspace}/{repo}/hooks`.
#[derive(Debug, Serialize)]
pub struct CreateHookBody {
    /// Human-readable description of the hook.
    pub description: String,
    /// The target URL to notify.
    pub url: String,
    /// Whether the hook is active on creation.
    pub active: bool,
    /// Event names to subscribe to.
    pub events: Vec<String>,
    /// Shared secret for payload signing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
}
