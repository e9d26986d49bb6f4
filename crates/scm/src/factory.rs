//! Provider detection and construction from repository URLs.
//!
//! Detection is an explicit, statically enumerated table of matchers
//! rather than an open-ended registry: each [`Matcher`] pairs a URL
//! predicate with a constructor for one provider variant. Tests can pass
//! their own table to exercise dispatch with fake providers.

use tracing::debug;
use url::Url;

use crate::credential::Credential;
use crate::error::Error;
use crate::providers::bitbucket::Bitbucket;
use crate::providers::github::GitHub;
use crate::providers::gitlab::GitLab;
use crate::providers::{Provider, ProviderError};

/// A single entry in the provider-detection table.
pub struct Matcher {
    /// Provider name, for diagnostics.
    pub name: &'static str,
    /// Whether this provider hosts the given repository URL.
    pub matches: fn(&Url) -> bool,
    /// Construct a client for the given repository URL. The credential
    /// is passed explicitly; the URL is never mutated to carry it.
    pub build: fn(&Url, &Credential) -> Result<Box<dyn Provider>, ProviderError>,
}

/// Selects and constructs the provider client for a repository URL.
pub struct Factory {
    matchers: Vec<Matcher>,
}

impl Factory {
    /// Create a factory with an explicit matcher table.
    #[must_use]
    pub fn new(matchers: Vec<Matcher>) -> Self {
        Self { matchers }
    }

    /// The name of the provider that would handle `url`, if any.
    #[must_use]
    pub fn detect(&self, url: &Url) -> Option<&'static str> {
        self.matchers
            .iter()
            .find(|m| (m.matches)(url))
            .map(|m| m.name)
    }

    /// Construct a provider client for `url`, authenticated with
    /// `credential`.
    ///
    /// Matchers are tried in table order; the first match wins.
    ///
    /// # Errors
    /// Returns [`Error::UnsupportedProvider`] when no matcher accepts
    /// the URL, or [`Error::ProviderRequestFailed`] when the matched
    /// client cannot be constructed.
    pub fn build(
        &self,
        url: &Url,
        credential: &Credential,
    ) -> Result<Box<dyn Provider>, Error> {
        let matcher = self
            .matchers
            .iter()
            .find(|m| (m.matches)(url))
            .ok_or_else(|| Error::UnsupportedProvider {
                url: url.to_string(),
            })?;

        debug!(provider = matcher.name, host = ?url.host_str(), "Matched hosting provider");

        (matcher.build)(url, credential).map_err(|source| Error::ProviderRequestFailed {
            operation: "construct provider client",
            target: url.to_string(),
            source,
        })
    }
}

impl Default for Factory {
    fn default() -> Self {
        Self::new(default_matchers())
    }
}

/// The built-in provider table: GitHub, GitLab (including self-managed
/// instances), Bitbucket Cloud.
#[must_use]
pub fn default_matchers() -> Vec<Matcher> {
    vec![
        Matcher {
            name: "github",
            matches: |url| url.host_str() == Some("github.com"),
            build: |_, credential| Ok(Box::new(GitHub::new(credential.clone())?)),
        },
        Matcher {
            name: "gitlab",
            matches: |url| url.host_str().is_some_and(|h| h.contains("gitlab")),
            build: |url, credential| Ok(Box::new(GitLab::from_repo_url(url, credential.clone())?)),
        },
        Matcher {
            name: "bitbucket",
            matches: |url| url.host_str().is_some_and(|h| h.contains("bitbucket")),
            build: |_, credential| Ok(Box::new(Bitbucket::new(credential.clone())?)),
        },
    ]
}
