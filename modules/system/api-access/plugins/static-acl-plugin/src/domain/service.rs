//! Domain service for the static API access plugin.

use std::collections::{HashMap, HashSet};

use api_access_sdk::{AccessPolicy, Account, AccountId, PolicyId};

use crate::config::{PolicyConfig, StaticAclPluginConfig};

/// Static API access service.
///
/// Stores accounts and their bound policies in memory, loaded from
/// configuration.
pub struct Service {
    /// Account records by ID.
    pub(super) accounts: HashMap<AccountId, Account>,

    /// Bound policies by account ID, in configuration order.
    pub(super) bindings: HashMap<AccountId, Vec<AccessPolicy>>,

    /// Number of distinct policy IDs defined in configuration.
    defined_policies: usize,
}

fn to_policy(cfg: &PolicyConfig) -> AccessPolicy {
    let policy = AccessPolicy::new(cfg.id.clone(), cfg.name.clone());
    let policy = cfg.allow.iter().fold(policy, |p, op| p.allow(op));
    cfg.deny.iter().fold(policy, |p, op| p.deny(op))
}

impl Service {
    /// Creates a new service from configuration.
    ///
    /// References to undefined policies are dropped with a warning, and
    /// policies no account references are reported. Later definitions of a
    /// duplicated ID replace earlier ones.
    #[must_use]
    pub fn from_config(cfg: &StaticAclPluginConfig) -> Self {
        let mut policies: HashMap<&PolicyId, AccessPolicy> = HashMap::new();
        for p in &cfg.policies {
            if policies.insert(&p.id, to_policy(p)).is_some() {
                tracing::warn!(policy.id = %p.id, "Duplicate policy definition; keeping the last one");
            }
        }

        let mut accounts = HashMap::new();
        let mut bindings = HashMap::new();
        for a in &cfg.accounts {
            let bound: Vec<AccessPolicy> = a
                .policies
                .iter()
                .filter_map(|id| {
                    let policy = policies.get(id).cloned();
                    if policy.is_none() {
                        tracing::warn!(
                            account.id = %a.id,
                            policy.id = %id,
                            "Account references an undefined policy; binding ignored"
                        );
                    }
                    policy
                })
                .collect();

            let account = Account {
                id: a.id.clone(),
                name: a.name.clone(),
            };
            if accounts.insert(a.id.clone(), account).is_some() {
                tracing::warn!(account.id = %a.id, "Duplicate account definition; keeping the last one");
            }
            bindings.insert(a.id.clone(), bound);
        }

        let referenced: HashSet<&PolicyId> =
            cfg.accounts.iter().flat_map(|a| a.policies.iter()).collect();
        for id in policies.keys().filter(|id| !referenced.contains(*id)) {
            tracing::warn!(policy.id = %id, "Policy is not bound to any account");
        }

        tracing::info!(
            accounts = accounts.len(),
            policies = policies.len(),
            "Loaded static API access data"
        );

        Self {
            accounts,
            bindings,
            defined_policies: policies.len(),
        }
    }

    #[must_use]
    pub fn account_count(&self) -> usize {
        self.accounts.len()
    }

    /// Number of distinct policies defined in configuration.
    #[must_use]
    pub fn policy_count(&self) -> usize {
        self.defined_policies
    }

    /// Number of distinct policies bound to at least one account.
    #[must_use]
    pub fn bound_policy_count(&self) -> usize {
        let mut ids: Vec<&PolicyId> = self.bindings.values().flatten().map(|p| &p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        ids.len()
    }
}
