//! Domain models for the api-access module.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque account identifier, owned by the account directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(String);

impl AccountId {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AccountId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for AccountId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Authenticated caller record.
///
/// Only `account_id` takes part in the decision; `user_id` is carried for
/// diagnostics by the calling layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub account_id: AccountId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

impl Identity {
    #[must_use]
    pub fn for_account(account_id: impl Into<AccountId>) -> Self {
        Self {
            account_id: account_id.into(),
            user_id: None,
        }
    }

    #[must_use]
    pub fn for_user(account_id: impl Into<AccountId>, user_id: impl Into<String>) -> Self {
        Self {
            account_id: account_id.into(),
            user_id: Some(user_id.into()),
        }
    }
}

/// Account record as returned by the account directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,
    pub name: String,
}

/// Access policy identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PolicyId(String);

impl PolicyId {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PolicyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PolicyId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for PolicyId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Wildcard action matching every operation name.
pub const ANY_OPERATION: &str = "*";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermissionEffect {
    Allow,
    Deny,
}

/// A single rule of an access policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyPermission {
    /// Operation name, or `"*"` for every operation.
    pub action: String,
    pub effect: PermissionEffect,
}

impl PolicyPermission {
    /// Exact, case-sensitive match; `"*"` matches anything.
    #[must_use]
    pub fn matches(&self, operation: &str) -> bool {
        self.action == ANY_OPERATION || self.action == operation
    }
}

/// Named rule set describing which operations it permits.
///
/// A policy grants an operation when one of its `Allow` permissions matches
/// and none of its own `Deny` permissions does. A deny never reaches beyond
/// the policy that declares it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessPolicy {
    pub id: PolicyId,
    pub name: String,
    #[serde(default)]
    pub permissions: Vec<PolicyPermission>,
}

impl AccessPolicy {
    #[must_use]
    pub fn new(id: impl Into<PolicyId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            permissions: Vec::new(),
        }
    }

    #[must_use]
    pub fn allow(mut self, action: &str) -> Self {
        self.permissions.push(PolicyPermission {
            action: action.to_owned(),
            effect: PermissionEffect::Allow,
        });
        self
    }

    #[must_use]
    pub fn deny(mut self, action: &str) -> Self {
        self.permissions.push(PolicyPermission {
            action: action.to_owned(),
            effect: PermissionEffect::Deny,
        });
        self
    }

    #[must_use]
    pub fn grants(&self, operation: &str) -> bool {
        let mut allowed = false;
        for permission in self.permissions.iter().filter(|p| p.matches(operation)) {
            match permission.effect {
                PermissionEffect::Deny => return false,
                PermissionEffect::Allow => allowed = true,
            }
        }
        allowed
    }
}

/// Why an operation was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DenyReason {
    AccountNotFound,
    OperationNotPermitted,
}

/// How much a calling layer reveals about a denial.
///
/// `Uniform` hides whether the account or the command exists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DenialDisclosure {
    Detailed,
    #[default]
    Uniform,
}

impl DenyReason {
    #[must_use]
    pub fn public_message(self, disclosure: DenialDisclosure) -> &'static str {
        match (disclosure, self) {
            (DenialDisclosure::Uniform, _) => "access denied",
            (DenialDisclosure::Detailed, DenyReason::AccountNotFound) => "account not found",
            (DenialDisclosure::Detailed, DenyReason::OperationNotPermitted) => {
                "operation does not exist or is not permitted"
            }
        }
    }
}

/// Outcome of a single access check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "decision", content = "reason", rename_all = "snake_case")]
pub enum Decision {
    Allowed,
    Denied(DenyReason),
}

impl Decision {
    #[must_use]
    pub fn is_allowed(self) -> bool {
        matches!(self, Decision::Allowed)
    }
}
