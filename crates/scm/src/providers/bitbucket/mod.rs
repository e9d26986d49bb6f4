//! Bitbucket hosting provider.
//!
//! Implements the [`Provider`] trait for the Bitbucket Cloud REST API
//! (2.0).

mod client;
mod models;

pub use client::Bitbucket;
pub use models::*;
