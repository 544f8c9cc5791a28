//! Collaborator contracts consumed by the access checker.
//!
//! The checker depends only on these capabilities. Storage-backed
//! implementations live in plugins (see `static-acl-plugin`).

use async_trait::async_trait;

use crate::error::ApiAccessError;
use crate::models::{AccessPolicy, Account, AccountId};

/// Resolves account identifiers to account records.
#[async_trait]
pub trait AccountDirectory: Send + Sync {
    /// Look up an account.
    ///
    /// Absence is `Ok(None)`, not an error.
    ///
    /// # Errors
    ///
    /// - `Internal` if the directory cannot be reached
    async fn resolve(&self, account_id: &AccountId) -> Result<Option<Account>, ApiAccessError>;
}

/// Returns the access policies bound to an account.
#[async_trait]
pub trait PolicyStore: Send + Sync {
    /// List policies bound to `account_id`.
    ///
    /// An account with no bindings yields an empty list. Order carries no
    /// meaning.
    ///
    /// # Errors
    ///
    /// - `Internal` if the store cannot be reached
    async fn policies_for(&self, account_id: &AccountId)
    -> Result<Vec<AccessPolicy>, ApiAccessError>;
}

/// Decides whether a set of policies permits an operation.
pub trait PolicyEvaluator: Send + Sync {
    /// Returns `true` iff the policy set permits `operation`.
    ///
    /// Must return `false` for an empty set.
    fn is_allowed(&self, operation: &str, policies: &[AccessPolicy]) -> bool;
}
