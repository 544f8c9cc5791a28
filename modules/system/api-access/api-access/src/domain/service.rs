//! Domain service for the api-access module.

use std::sync::Arc;

use api_access_sdk::{AccountDirectory, Identity, PolicyEvaluator, PolicyStore};

use super::error::DomainError;
use super::evaluator::UnionPolicyEvaluator;

/// Role-based access checker.
///
/// Grants an operation if any policy bound to the caller's account permits
/// it. Holds no mutable state, so one instance serves all request handlers.
pub struct AccessChecker {
    accounts: Arc<dyn AccountDirectory>,
    policies: Arc<dyn PolicyStore>,
    evaluator: Arc<dyn PolicyEvaluator>,
}

impl AccessChecker {
    #[must_use]
    pub fn new(
        accounts: Arc<dyn AccountDirectory>,
        policies: Arc<dyn PolicyStore>,
        evaluator: Arc<dyn PolicyEvaluator>,
    ) -> Self {
        Self {
            accounts,
            policies,
            evaluator,
        }
    }

    /// Creates a checker using [`UnionPolicyEvaluator`].
    #[must_use]
    pub fn with_union_evaluator(
        accounts: Arc<dyn AccountDirectory>,
        policies: Arc<dyn PolicyStore>,
    ) -> Self {
        Self::new(accounts, policies, Arc::new(UnionPolicyEvaluator))
    }

    /// Decide whether `identity` may invoke `operation`.
    ///
    /// The operation name is passed to the evaluator untouched.
    ///
    /// # Errors
    ///
    /// - `AccountNotFound` if the account does not resolve; the policy
    ///   store is not consulted in that case
    /// - `OperationNotPermitted` if no bound policy grants the operation
    /// - `Directory` / `PolicyStore` if a collaborator failed
    pub async fn check_access(
        &self,
        identity: &Identity,
        operation: &str,
    ) -> Result<bool, DomainError> {
        let Some(account) = self
            .accounts
            .resolve(&identity.account_id)
            .await
            .map_err(DomainError::Directory)?
        else {
            return Err(DomainError::AccountNotFound {
                account_id: identity.account_id.clone(),
            });
        };

        let policies = self
            .policies
            .policies_for(&account.id)
            .await
            .map_err(DomainError::PolicyStore)?;

        if !self.evaluator.is_allowed(operation, &policies) {
            return Err(DomainError::OperationNotPermitted {
                operation: operation.to_owned(),
            });
        }
        Ok(true)
    }
}
