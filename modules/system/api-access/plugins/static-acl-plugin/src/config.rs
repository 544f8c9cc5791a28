//! Configuration for the static API access plugin.

use api_access_sdk::{AccountId, PolicyId};
use serde::{Deserialize, Serialize};

/// Plugin configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StaticAclPluginConfig {
    /// Static account definitions with their policy bindings.
    pub accounts: Vec<AccountConfig>,

    /// Static policy definitions.
    pub policies: Vec<PolicyConfig>,
}

/// Configuration for a single account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AccountConfig {
    pub id: AccountId,

    #[serde(default)]
    pub name: String,

    /// IDs of the policies bound to this account.
    #[serde(default)]
    pub policies: Vec<PolicyId>,
}

/// Configuration for a single access policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PolicyConfig {
    pub id: PolicyId,

    #[serde(default)]
    pub name: String,

    /// Operations this policy grants (`"*"` for all).
    #[serde(default)]
    pub allow: Vec<String>,

    /// Operations this policy blacklists. Only affects this policy.
    #[serde(default)]
    pub deny: Vec<String>,
}
