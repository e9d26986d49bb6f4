//! GitLab hosting provider.
//!
//! Implements the [`Provider`] trait for the GitLab REST API (v4),
//! covering both gitlab.com and self-managed instances.

mod client;
mod models;

pub use client::GitLab;
pub use models::*;
