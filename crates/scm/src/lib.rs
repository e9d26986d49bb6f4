//! Git hosting abstraction and webhook management.
//!
//! This crate abstracts over multiple git hosting providers (GitHub,
//! GitLab, Bitbucket) behind a single [`Provider`] trait and exposes a
//! [`Repository`] handle for managing webhooks on a repository.
//!
//! Webhook reconciliation is caller-driven: list the hooks pointing at a
//! listener URL, create one only when none exist, delete them on
//! teardown. This crate provides the transition primitives and holds no
//! local webhook state; every query goes to the provider.
//!
//! # Example
//!
//! ```rust,ignore
//! use scm::Repository;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), scm::Error> {
//!     let repo = Repository::new("https://github.com/my-org/my-repo.git", "token")?;
//!
//!     // Register the listener only if it is not already registered.
//!     let existing = repo.list_webhooks("https://listener.example/hook").await?;
//!     if existing.is_empty() {
//!         repo.create_webhook("https://listener.example/hook", "s3cr3t").await?;
//!     }
//!
//!     Ok(())
//! }
//! ```

#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod credential;
pub mod error;
pub mod factory;
pub mod providers;
pub mod repository;
pub mod resolver;

pub use credential::Credential;
pub use error::{DeleteWebhooksError, Error};
pub use factory::{Factory, Matcher};
pub use providers::{Hook, HookEvents, HookInput, Provider, ProviderError};
pub use repository::Repository;
pub use resolver::RepoName;
