//! Local (in-process) client for the api-access module.
//!
//! Decision logging happens here, around the checker boundary, so the
//! decision itself stays free of side effects.

use std::sync::Arc;

use api_access_sdk::{ApiAccessClient, ApiAccessError, Identity};
use async_trait::async_trait;

use super::{AccessChecker, DomainError};

/// Local client wrapping the access checker.
///
/// Registered in the [`CheckerRegistry`](crate::CheckerRegistry) by
/// [`register_checker`](crate::register_checker).
pub struct ApiAccessLocalClient {
    checker: Arc<AccessChecker>,
}

impl ApiAccessLocalClient {
    #[must_use]
    pub fn new(checker: Arc<AccessChecker>) -> Self {
        Self { checker }
    }
}

fn log_and_convert(identity: &Identity, e: DomainError) -> ApiAccessError {
    let user_id = identity.user_id.as_deref().unwrap_or("-");
    match &e {
        DomainError::AccountNotFound { .. } => {
            tracing::info!(user.id = user_id, error = %e, "access denied: unknown account");
        }
        DomainError::OperationNotPermitted { .. } => {
            tracing::info!(user.id = user_id, error = %e, "access denied: operation not permitted");
        }
        DomainError::Directory(_) | DomainError::PolicyStore(_) => {
            tracing::error!(user.id = user_id, error = ?e, "access check failed");
        }
    }
    e.into()
}

#[async_trait]
impl ApiAccessClient for ApiAccessLocalClient {
    #[tracing::instrument(skip_all, fields(account.id = %identity.account_id, operation = %operation))]
    async fn check_access(
        &self,
        identity: &Identity,
        operation: &str,
    ) -> Result<bool, ApiAccessError> {
        let allowed = self
            .checker
            .check_access(identity, operation)
            .await
            .map_err(|e| log_and_convert(identity, e))?;
        tracing::debug!(
            user.id = identity.user_id.as_deref().unwrap_or("-"),
            "access granted"
        );
        Ok(allowed)
    }
}
