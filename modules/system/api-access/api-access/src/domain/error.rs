//! Domain errors for the api-access module.

use api_access_sdk::{AccountId, ApiAccessError, DenyReason};
use thiserror::Error;

/// Domain-level errors produced by the access checker.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("account not found: {account_id}")]
    AccountNotFound { account_id: AccountId },

    #[error("operation does not exist or is not permitted: {operation}")]
    OperationNotPermitted { operation: String },

    /// Account directory failed to answer.
    #[error("account directory error: {0}")]
    Directory(#[source] ApiAccessError),

    /// Policy store failed to answer.
    #[error("policy store error: {0}")]
    PolicyStore(#[source] ApiAccessError),
}

impl DomainError {
    #[must_use]
    pub fn deny_reason(&self) -> Option<DenyReason> {
        match self {
            Self::AccountNotFound { .. } => Some(DenyReason::AccountNotFound),
            Self::OperationNotPermitted { .. } => Some(DenyReason::OperationNotPermitted),
            Self::Directory(_) | Self::PolicyStore(_) => None,
        }
    }
}

/// Convert domain errors to SDK errors for the API boundary.
///
/// Collaborator failures pass through unchanged.
impl From<DomainError> for ApiAccessError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::AccountNotFound { account_id } => Self::AccountNotFound { account_id },
            DomainError::OperationNotPermitted { operation } => {
                Self::OperationNotPermitted { operation }
            }
            DomainError::Directory(e) | DomainError::PolicyStore(e) => e,
        }
    }
}
