//! GitHub API request and response models.
//!
//! Only the fields this crate reads or writes are modelled; the hooks
//! API returns more.

use serde::{Deserialize, Serialize};

/// A hook as returned by `GET /repos/{owner}/{repo}/hooks`.
#[derive(Debug, Deserialize)]
pub struct HookResource {
    /// Numeric hook ID.
    pub id: u64,
    /// Subscribed event names.
    #[serde(default)]
    pub events: Vec<String>,
    /// Hook delivery configuration.
    pub config: HookConfig,
}

/// Delivery configuration of an existing hook.
///
/// The secret is never echoed back by the API.
#[derive(Debug, Deserialize)]
pub struct HookConfig {
    /// The target URL the hook notifies.
    pub url: Option<String>,
}

/// Request body for `POST /repos/{owner}/{repo}/hooks`.
#[derive(Debug, Serialize)]
pub struct CreateHookBody {
    /// Hook name; always `"web"` for webhooks.
    pub name: String,
    /// Whether the hook is active on creation.
    pub active: bool,
    /// Event names to subscribe to.
    pub events: Vec<String>,
    /// Delivery configuration.
    pub config: CreateHookConfig,
}

/// Delivery configuration for a new hook.
#[derive(Debug, Serialize)]
pub struct CreateHookConfig {
    /// The target URL to notify.
    pub url: String,
    /// Payload content type.
    pub content_type: String,
    /// Shared secret for signature verification.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
}
