//! Error types for repository and webhook operations.

use thiserror::Error;

use crate::providers::ProviderError;

/// Errors that can occur when resolving a repository or operating on its
/// webhooks.
///
/// Every variant carries the offending URL, repository, or ID so the
/// failure is diagnosable without further context. Nothing is retried or
/// swallowed; errors surface to the caller immediately.
#[derive(Debug, Error)]
pub enum Error {
    /// The URL path cannot be reduced to an `owner/repo` identifier.
    #[error("malformed repository URL {url:?}: expected an owner/repo path")]
    MalformedRepositoryUrl {
        /// The URL that failed resolution.
        url: String,
    },

    /// The raw input is not a parseable URL at all.
    #[error("invalid repository URL {url:?}")]
    InvalidUrl {
        /// The raw input.
        url: String,
        /// The underlying parse error.
        #[source]
        source: url::ParseError,
    },

    /// The URL does not match any known hosting provider.
    #[error("no supported git hosting provider matches {url:?}")]
    UnsupportedProvider {
        /// The URL that failed provider detection.
        url: String,
    },

    /// A remote call returned a transport or API-level error.
    #[error("{operation} failed for {target}")]
    ProviderRequestFailed {
        /// The operation that failed.
        operation: &'static str,
        /// The repository, webhook ID, or URL involved.
        target: String,
        /// The provider's original error.
        #[source]
        source: ProviderError,
    },
}

/// Partial failure of a multi-ID webhook deletion.
///
/// Deletion is sequential and stops at the first failure. `deleted`
/// holds the IDs removed before the failure, in the order they were
/// supplied; IDs after `failed` were never attempted. Callers must
/// inspect `deleted` to know what succeeded rather than assuming
/// all-or-nothing.
#[derive(Debug, Error)]
#[error("failed to delete webhook {failed} from {repo}")]
pub struct DeleteWebhooksError {
    /// IDs deleted before the failure, in submission order.
    pub deleted: Vec<String>,
    /// The ID whose deletion failed.
    pub failed: String,
    /// The repository the deletion ran against.
    pub repo: String,
    /// The provider's original error.
    #[source]
    pub source: ProviderError,
}
