//! Bitbucket Cloud REST API client implementation.
//!
//! API Documentation:
//! <https://developer.atlassian.com/cloud/bitbucket/rest/api-group-repositories/>

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info, warn};

use super::models::{CreateHookBody, HookResource, Paged};
use crate::credential::Credential;
use crate::providers::traits::{Hook, HookInput, Provider, ProviderError};
use crate::resolver::RepoName;

/// Base URL for the Bitbucket Cloud API.
const API_BASE_URL: &str = "https://api.bitbucket.org/2.0";

/// Default timeout for API requests.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Bitbucket Cloud hosting provider.
#[derive(Clone)]
pub struct Bitbucket {
    /// HTTP client.
    client: Client,
    /// API base URL.
    base_url: String,
    /// Bearer token for authentication.
    token: Credential,
}

impl Bitbucket {
    /// Create a new Bitbucket provider against the cloud API.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be created.
    pub fn new(token: Credential) -> Result<Self, ProviderError> {
        Self::with_base_url(API_BASE_URL, token)
    }

    /// Create a new Bitbucket provider against a specific API base URL.
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

    /// Make an authenticated GET request.
    async fn get<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, ProviderError> {
        let url = format!("{}{path}", self.base_url);
        debug!(url = %url, "GET request");

        let response = self
            .client
            .get(&url)
            .header("Authorization", format!("Bearer {}", self.token.token()))
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
            .header("Authorization", format!("Bearer {}", self.token.token()))
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
            .header("Authorization", format!("Bearer {}", self.token.token()))
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

    /// Convert an API hook resource to our Hook type.
    fn to_hook(resource: &HookResource) -> Hook {
        Hook {
            id: resource.uuid.clone(),
            target: resource.url.clone(),
        }
    }
}

#[async_trait]
impl Provider for Bitbucket {
    async fn list_hooks(&self, repo: &RepoName) -> Result<Vec<Hook>, ProviderError> {
        let page: Paged<HookResource> =
            self.get(&format!("/repositories/{repo}/hooks")).await?;
        Ok(page.values.iter().map(Self::to_hook).collect())
    }

    async fn create_hook(
        &self,
        repo: &RepoName,
        input: &HookInput,
    ) -> Result<Hook, ProviderError> {
        info!(repo = %repo, target = %input.target, "Creating webhook");

        let mut events = Vec::new();
        if input.events.push {
            events.push("repo:push".to_string());
        }
        if input.events.pull_request {
            events.push("pullrequest:created".to_string());
            events.push("pullrequest:updated".to_string());
        }

        let body = CreateHookBody {
            description: "ci listener".to_string(),
            url: input.target.clone(),
            active: true,
            events,
            secret: (!input.secret.is_empty()).then(|| input.secret.clone()),
        };

        let created: HookResource =
            self.post(&format!("/repositories/{repo}/hooks"), &body).await?;
        let hook = Self::to_hook(&created);

        info!(repo = %repo, hook_id = %hook.id, "Webhook created");
        Ok(hook)
    }

    async fn delete_hook(&self, repo: &RepoName, id: &str) -> Result<(), ProviderError> {
        info!(repo = %repo, hook_id = %id, "Deleting webhook");
        self.delete(&format!("/repositories/{repo}/hooks/{id}")).await
    }
}
