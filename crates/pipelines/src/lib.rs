//! Typed builders for declarative CI/CD task definitions.
//!
//! Produces plain data descriptions of pipeline tasks; nothing here
//! talks to a cluster or serializes manifests to disk. The webhook
//! management layer consumes this crate only through
//! [`tasks::create_deploy_from_source_task`].

#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod tasks;

pub use tasks::{create_deploy_from_source_task, Task};
