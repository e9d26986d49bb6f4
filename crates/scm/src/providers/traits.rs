//! Provider trait and common types for git hosting providers.

use std::fmt;

use async_trait::async_trait;
use thiserror::Error;

use crate::resolver::RepoName;

/// Errors that can occur during provider operations.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error response.
    #[error("API error: {status} - {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body, as returned by the provider.
        message: String,
    },

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// A webhook registered on a repository.
///
/// The `id` is provider-assigned and opaque; it is only meaningful when
/// passed back to the same provider. Webhook secrets are write-only on
/// every supported provider and are never read back, so there is no
/// secret field here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hook {
    /// Provider-assigned webhook ID.
    pub id: String,
    /// The listener URL this webhook notifies.
    pub target: String,
}

/// Event classes a webhook subscribes to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HookEvents {
    /// Push events.
    pub push: bool,
    /// Pull/merge-request events.
    pub pull_request: bool,
}

/// Input for creating a webhook.
pub struct HookInput {
    /// The listener URL the webhook notifies.
    pub target: String,
    /// Shared secret for the provider's signature verification.
    pub secret: String,
    /// Event classes to subscribe to.
    pub events: HookEvents,
}

impl fmt::Debug for HookInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HookInput")
            .field("target", &self.target)
            .field("secret", &"***")
            .field("events", &self.events)
            .finish()
    }
}

/// Trait for git hosting providers.
///
/// A closed capability set: list, create, and delete webhooks on a
/// repository. Implementations make one blocking round trip per call
/// with no retries, caching, or internal concurrency; cancellation is
/// dropping the future.
#[async_trait]
pub trait Provider: Send + Sync {
    /// List all webhooks on the repository.
    async fn list_hooks(&self, repo: &RepoName) -> Result<Vec<Hook>, ProviderError>;

    /// Create a webhook on the repository.
    async fn create_hook(&self, repo: &RepoName, input: &HookInput)
        -> Result<Hook, ProviderError>;

    /// Delete a webhook by its provider-assigned ID.
    async fn delete_hook(&self, repo: &RepoName, id: &str) -> Result<(), ProviderError>;
}

impl std::fmt::Debug for dyn Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("dyn Provider")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hook_input_debug_redacts_secret() {
        let input = HookInput {
            target: "https://listener.example/hook".to_string(),
            secret: "s3cr3t".to_string(),
            events: HookEvents {
                push: true,
                pull_request: true,
            },
        };
        let rendered = format!("{input:?}");
        assert!(!rendered.contains("s3cr3t"));
        assert!(rendered.contains("listener.example"));
    }
}
