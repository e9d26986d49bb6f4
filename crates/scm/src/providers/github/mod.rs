//! GitHub hosting provider.
//!
//! Implements the [`Provider`] trait for the GitHub REST API.

mod client;
mod models;

pub use client::GitHub;
pub use models::*;
