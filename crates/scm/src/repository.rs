//! Repository handle combining a resolved name with a provider client.

use tracing::{debug, info};
use url::Url;

use crate::credential::Credential;
use crate::error::{DeleteWebhooksError, Error};
use crate::factory::Factory;
use crate::providers::{HookEvents, HookInput, Provider};
use crate::resolver::{self, RepoName};

/// A git repository on a hosting provider.
///
/// Owns its provider client; create one handle per repository per
/// operation session and do not share it across tasks. Webhook
/// reconciliation is caller-orchestrated from the three primitives
/// here: list hooks for a listener, create one when the list is empty,
/// delete the listed IDs on teardown. No webhook state is held locally.
pub struct Repository {
    client: Box<dyn Provider>,
    name: RepoName,
}

impl std::fmt::Debug for Repository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Repository")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl Repository {
    /// Create a handle for the repository at `raw_url`, authenticating
    /// with `token`, using the built-in provider table.
    ///
    /// # Errors
    /// Returns [`Error::InvalidUrl`] when the URL does not parse,
    /// [`Error::UnsupportedProvider`] when no provider matches it, or
    /// [`Error::MalformedRepositoryUrl`] when the path does not resolve
    /// to an `owner/repo` name. Client construction is attempted before
    /// name resolution.
    pub fn new(raw_url: &str, token: &str) -> Result<Self, Error> {
        Self::with_factory(&Factory::default(), raw_url, token)
    }

    /// Create a handle using an explicit provider table.
    ///
    /// # Errors
    /// Same contract as [`Repository::new`].
    pub fn with_factory(factory: &Factory, raw_url: &str, token: &str) -> Result<Self, Error> {
        let parsed = Url::parse(raw_url).map_err(|source| Error::InvalidUrl {
            url: raw_url.to_string(),
            source,
        })?;

        let credential = Credential::new(token);
        let client = factory.build(&parsed, &credential)?;
        let name = resolver::resolve(&parsed)?;

        debug!(repo = %name, "Repository handle created");
        Ok(Self { client, name })
    }

    /// Create a handle from an already-constructed client and name.
    #[must_use]
    pub fn from_parts(client: Box<dyn Provider>, name: RepoName) -> Self {
        Self { client, name }
    }

    /// The resolved `owner/repo` name.
    #[must_use]
    pub fn name(&self) -> &RepoName {
        &self.name
    }

    /// List the IDs of webhooks notifying `listener_url`.
    ///
    /// Fetches all hooks for the repository, then keeps only those whose
    /// target equals `listener_url` exactly (case-sensitive, no
    /// normalization of scheme or trailing slashes), preserving the
    /// provider's order. An empty result is not an error.
    ///
    /// # Errors
    /// Returns [`Error::ProviderRequestFailed`] when the remote call
    /// fails.
    pub async fn list_webhooks(&self, listener_url: &str) -> Result<Vec<String>, Error> {
        let hooks = self.client.list_hooks(&self.name).await.map_err(|source| {
            Error::ProviderRequestFailed {
                operation: "list webhooks",
                target: self.name.to_string(),
                source,
            }
        })?;

        let ids: Vec<String> = hooks
            .into_iter()
            .filter(|hook| hook.target == listener_url)
            .map(|hook| hook.id)
            .collect();

        debug!(repo = %self.name, listener = %listener_url, matched = ids.len(), "Listed webhooks");
        Ok(ids)
    }

    /// Delete the given webhooks, strictly in order.
    ///
    /// Deletion is sequential; the remote account is a single shared
    /// resource and provider rate limits make parallel deletion unsafe
    /// without extra coordination. The first failure stops the run and
    /// is returned together with the IDs deleted so far; later IDs are
    /// never attempted. An empty `ids` returns `Ok` without issuing any
    /// request.
    ///
    /// # Errors
    /// Returns [`DeleteWebhooksError`] carrying the partial result and
    /// the failing ID.
    pub async fn delete_webhooks(
        &self,
        ids: &[String],
    ) -> Result<Vec<String>, DeleteWebhooksError> {
        let mut deleted = Vec::new();

        for id in ids {
            match self.client.delete_hook(&self.name, id).await {
                Ok(()) => deleted.push(id.clone()),
                Err(source) => {
                    return Err(DeleteWebhooksError {
                        deleted,
                        failed: id.clone(),
                        repo: self.name.to_string(),
                        source,
                    })
                }
            }
        }

        info!(repo = %self.name, count = deleted.len(), "Deleted webhooks");
        Ok(deleted)
    }

    /// Create a webhook notifying `listener_url`, subscribed to push and
    /// pull/merge-request events, carrying `secret` for signature
    /// verification.
    ///
    /// Returns the provider-assigned ID. No existence check is made
    /// first; callers avoid duplicate hooks by listing before creating.
    ///
    /// # Errors
    /// Returns [`Error::ProviderRequestFailed`] when the remote call
    /// fails.
    pub async fn create_webhook(&self, listener_url: &str, secret: &str) -> Result<String, Error> {
        let input = HookInput {
            target: listener_url.to_string(),
            secret: secret.to_string(),
            events: HookEvents {
                push: true,
                pull_request: true,
            },
        };

        let created = self
            .client
            .create_hook(&self.name, &input)
            .await
            .map_err(|source| Error::ProviderRequestFailed {
                operation: "create webhook",
                target: listener_url.to_string(),
                source,
            })?;

        Ok(created.id)
    }
}
