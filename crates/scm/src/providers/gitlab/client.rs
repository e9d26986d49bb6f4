//! GitLab REST API client implementation.
//!
//! API Documentation: <https://docs.gitlab.com/ee/api/projects.html#hooks>

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info, warn};
use url::Url;

use super::models::{CreateHookBody, ProjectHook};
use crate::credential::Credential;
use crate::providers::traits::{Hook, HookInput, Provider, ProviderError};
use crate::resolver::RepoName;

/// Default timeout for API requests.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// GitLab hosting provider.
///
/// The API base is derived from the repository URL's origin, so
/// self-managed instances work the same way as gitlab.com.
#[derive(Clone)]
pub struct GitLab {
    /// HTTP client.
    client: Client,
    /// API base URL, including the `/api/v4` prefix.
    base_url: String,
    /// Private token for authentication.
    token: Credential,
}

impl GitLab {
    /// Create a new GitLab provider for the instance hosting `repo_url`.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be created.
    pub fn from_repo_url(repo_url: &Url, token: Credential) -> Result<Self, ProviderError> {
        let host = repo_url.host_str().unwrap_or_default();
        Self::with_base_url(
            format!("{}://{host}/api/v4", repo_url.scheme()),
            token,
        )
    }

    /// Create a new GitLab provider against a specific API base URL.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be created.
    pub fn with_base_url(
        base_url: impl Into<String>,
        token: Credential,
    ) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            token,
        })
    }

    /// Hooks collection path for a project, with the project path
    /// percent-encoded as GitLab requires.
    fn hooks_path(repo: &RepoName) -> String {
        format!("/projects/{}/hooks", urlencoding::encode(repo.as_str()))
    }

    /// Make an authenticated GET request.
    async fn get<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, ProviderError> {
        let url = format!("{}{path}", self.base_url);
        debug!(url = %url, "GET request");

        let response = self
            .client
            .get(&url)
            .header("PRIVATE-TOKEN", self.token.token())
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Make an authenticated POST request.
    async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, ProviderError>
    where
        T: serde::de::DeserializeOwned,
        B: serde::Serialize,
    {
        let url = format!("{}{path}", self.base_url);
        debug!(url = %url, "POST request");

        let response = self
            .client
            .post(&url)
            .header("PRIVATE-TOKEN", self.token.token())
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Make an authenticated DELETE request.
    async fn delete(&self, path: &str) -> Result<(), ProviderError> {
        let url = format!("{}{path}", self.base_url);
        debug!(url = %url, "DELETE request");

        let response = self
            .client
            .delete(&url)
            .header("PRIVATE-TOKEN", self.token.token())
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let text = response.text().await.unwrap_or_default();
            Err(ProviderError::Api {
                status: status.as_u16(),
                message: text,
            })
        }
    }

    /// Handle API response, parsing JSON or error.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, ProviderError> {
        let status = response.status();
        let text = response.text().await?;

        if status.is_success() {
            serde_json::from_str(&text).map_err(|e| {
                warn!(error = %e, body = %text, "Failed to parse response");
                ProviderError::Serialization(e)
            })
        } else {
            Err(ProviderError::Api {
                status: status.as_u16(),
                message: text,
            })
        }
    }

    /// Convert an API project hook to our Hook type.
    fn to_hook(hook: &ProjectHook) -> Hook {
        Hook {
            id: hook.id.to_string(),
            target: hook.url.clone(),
        }
    }
}

#[async_trait]
impl Provider for GitLab {
    async fn list_hooks(&self, repo: &RepoName) -> Result<Vec<Hook>, ProviderError> {
        let hooks: Vec<ProjectHook> = self.get(&Self::hooks_path(repo)).await?;
        Ok(hooks.iter().map(Self::to_hook).collect())
    }

    async fn create_hook(
        &self,
        repo: &RepoName,
        input: &HookInput,
    ) -> Result<Hook, ProviderError> {
        info!(repo = %repo, target = %input.target, "Creating webhook");

        let body = CreateHookBody {
            url: input.target.clone(),
            token: (!input.secret.is_empty()).then(|| input.secret.clone()),
            push_events: input.events.push,
            merge_requests_events: input.events.pull_request,
        };

        let created: ProjectHook = self.post(&Self::hooks_path(repo), &body).await?;
        let hook = Self::to_hook(&created);

        info!(repo = %repo, hook_id = %hook.id, "Webhook created");
        Ok(hook)
    }

    async fn delete_hook(&self, repo: &RepoName, id: &str) -> Result<(), ProviderError> {
        info!(repo = %repo, hook_id = %id, "Deleting webhook");
        self.delete(&format!("{}/{id}", Self::hooks_path(repo))).await
    }
}
