//! API Access SDK
//!
//! This crate provides the public API for the `api-access` module:
//!
//! - [`ApiAccessClient`] - Public API trait for consumers (request dispatch layers)
//! - [`AccountDirectory`], [`PolicyStore`], [`PolicyEvaluator`] - Collaborator contracts
//! - [`Identity`], [`Account`], [`AccessPolicy`], [`Decision`] - Domain models
//! - [`ApiAccessError`] - Error types
//!
//! ## Usage
//!
//! Consumers obtain the client from the checker registry built at startup:
//!
//! ```ignore
//! use api_access_sdk::{ApiAccessClient, Identity};
//!
//! let checker = registry.get("role-based")?;
//!
//! // Fails with `AccountNotFound` or `OperationNotPermitted` on denial
//! checker.check_access(&Identity::for_account("A2"), "listVMs").await?;
//!
//! // Or fold both denial kinds into a `Decision`
//! let decision = checker.decide(&Identity::for_account("A2"), "deleteVM").await?;
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod api;
pub mod error;
pub mod models;
pub mod plugin_api;

pub use api::ApiAccessClient;
pub use error::ApiAccessError;
pub use models::{
    AccessPolicy, Account, AccountId, Decision, DenialDisclosure, DenyReason, Identity,
    PermissionEffect, PolicyId, PolicyPermission,
};
pub use plugin_api::{AccountDirectory, PolicyEvaluator, PolicyStore};
