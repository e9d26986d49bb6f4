//! Provider abstractions for git hosting services.

pub mod bitbucket;
pub mod github;
pub mod gitlab;
mod traits;

pub use traits::{Hook, HookEvents, HookInput, Provider, ProviderError};
