//! Public API trait for the access checker.
//!
//! This trait defines the interface a request dispatch layer uses to ask
//! whether a caller may invoke an operation.

use async_trait::async_trait;

use crate::error::ApiAccessError;
use crate::models::{Decision, DenyReason, Identity};

/// Public API trait for the access checker.
///
/// Implementations are registered once at startup and shared across
/// request handlers:
///
/// ```ignore
/// let checker = registry.get("role-based")?;
/// checker.check_access(&identity, "listVMs").await?;
/// ```
#[async_trait]
pub trait ApiAccessClient: Send + Sync {
    /// Check whether `identity` may invoke `operation`.
    ///
    /// Returns `Ok(true)` when allowed. Never returns `Ok(false)`: every
    /// denial is an error so it cannot be mistaken for success.
    ///
    /// # Errors
    ///
    /// - `AccountNotFound` if the identity's account does not resolve
    /// - `OperationNotPermitted` if no bound policy grants the operation
    /// - `Internal` if a collaborator failed
    async fn check_access(&self, identity: &Identity, operation: &str)
    -> Result<bool, ApiAccessError>;

    /// Same as [`check_access`](Self::check_access) with both denial kinds
    /// folded into a [`Decision`].
    ///
    /// # Errors
    ///
    /// Only errors without a deny reason (`Internal`, `NoCheckerAvailable`).
    async fn decide(
        &self,
        identity: &Identity,
        operation: &str,
    ) -> Result<Decision, ApiAccessError> {
        match self.check_access(identity, operation).await {
            Ok(true) => Ok(Decision::Allowed),
            Ok(false) => Ok(Decision::Denied(DenyReason::OperationNotPermitted)),
            Err(e) => match e.deny_reason() {
                Some(reason) => Ok(Decision::Denied(reason)),
                None => Err(e),
            },
        }
    }
}
