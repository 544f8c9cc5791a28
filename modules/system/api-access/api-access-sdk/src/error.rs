//! Error types for the api-access module.

use thiserror::Error;

use crate::models::{AccountId, DenyReason};

/// Errors that can occur when using the api-access API.
///
/// `AccountNotFound` and `OperationNotPermitted` are the two decision
/// outcomes of a check. They stay distinct here even when the calling layer
/// renders them identically.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiAccessError {
    /// The caller's account identifier does not resolve.
    #[error("account not found: {account_id}")]
    AccountNotFound {
        /// The unresolved account ID.
        account_id: AccountId,
    },

    /// No bound policy grants the operation.
    ///
    /// Also covers operation names that no policy recognizes, so callers
    /// cannot discover which commands exist.
    #[error("operation does not exist or is not permitted: {operation}")]
    OperationNotPermitted {
        /// The operation name as supplied by the caller.
        operation: String,
    },

    /// No checker is registered under the requested name.
    #[error("no access checker available")]
    NoCheckerAvailable,

    /// A collaborator failed to answer.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiAccessError {
    #[must_use]
    pub fn deny_reason(&self) -> Option<DenyReason> {
        match self {
            Self::AccountNotFound { .. } => Some(DenyReason::AccountNotFound),
            Self::OperationNotPermitted { .. } => Some(DenyReason::OperationNotPermitted),
            Self::NoCheckerAvailable | Self::Internal(_) => None,
        }
    }
}
