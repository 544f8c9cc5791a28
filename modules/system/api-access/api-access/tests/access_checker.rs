#![allow(clippy::unwrap_used, clippy::expect_used)]

//! End-to-end decision tests for the role-based access checker.
//!
//! Collaborators are in-memory fakes that count how often they are asked,
//! so the tests can assert which lookups happened.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use api_access::{AccessChecker, ApiAccessConfig, CheckerRegistry, DomainError, register_checker};
use api_access_sdk::{
    AccessPolicy, Account, AccountDirectory, AccountId, ApiAccessClient, ApiAccessError, Decision,
    DenyReason, Identity, PolicyStore,
};
use async_trait::async_trait;

#[derive(Default)]
struct CountingDirectory {
    accounts: HashMap<AccountId, Account>,
    calls: AtomicUsize,
}

#[async_trait]
impl AccountDirectory for CountingDirectory {
    async fn resolve(&self, account_id: &AccountId) -> Result<Option<Account>, ApiAccessError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.accounts.get(account_id).cloned())
    }
}

#[derive(Default)]
struct CountingStore {
    bindings: HashMap<AccountId, Vec<AccessPolicy>>,
    calls: AtomicUsize,
}

#[async_trait]
impl PolicyStore for CountingStore {
    async fn policies_for(
        &self,
        account_id: &AccountId,
    ) -> Result<Vec<AccessPolicy>, ApiAccessError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.bindings.get(account_id).cloned().unwrap_or_default())
    }
}

struct Fixture {
    directory: Arc<CountingDirectory>,
    store: Arc<CountingStore>,
    checker: AccessChecker,
}

/// Accounts A1..A3 with the bindings used across the scenarios:
/// - A1: no policies
/// - A2: P1 (grants `listVMs`)
/// - A3: P1 (blacklists `createNetwork`), P2 (grants `createNetwork`)
fn fixture() -> Fixture {
    let accounts = ["A1", "A2", "A3"]
        .into_iter()
        .map(|id| {
            (
                AccountId::from(id),
                Account {
                    id: AccountId::from(id),
                    name: format!("Account {id}"),
                },
            )
        })
        .collect();

    let bindings = HashMap::from([
        (AccountId::from("A1"), vec![]),
        (
            AccountId::from("A2"),
            vec![AccessPolicy::new("P1", "vm-reader").allow("listVMs")],
        ),
        (
            AccountId::from("A3"),
            vec![
                AccessPolicy::new("P1", "no-network")
                    .allow("listVMs")
                    .deny("createNetwork"),
                AccessPolicy::new("P2", "network-admin").allow("createNetwork"),
            ],
        ),
    ]);

    let directory = Arc::new(CountingDirectory {
        accounts,
        ..Default::default()
    });
    let store = Arc::new(CountingStore {
        bindings,
        ..Default::default()
    });
    let checker = AccessChecker::with_union_evaluator(directory.clone(), store.clone());

    Fixture {
        directory,
        store,
        checker,
    }
}

#[tokio::test]
async fn account_without_policies_is_denied() {
    let f = fixture();

    let err = f
        .checker
        .check_access(&Identity::for_account("A1"), "listVMs")
        .await
        .unwrap_err();

    assert_eq!(err.deny_reason(), Some(DenyReason::OperationNotPermitted));
}

#[tokio::test]
async fn account_without_policies_is_denied_for_every_operation() {
    let f = fixture();

    for op in ["listVMs", "deleteVM", "*", "", "unknownCommand"] {
        let err = f
            .checker
            .check_access(&Identity::for_account("A1"), op)
            .await
            .unwrap_err();
        assert_eq!(
            err,
            DomainError::OperationNotPermitted {
                operation: op.to_owned()
            },
            "operation {op:?}"
        );
    }
}

#[tokio::test]
async fn single_policy_grants_only_its_operations() {
    let f = fixture();
    let caller = Identity::for_account("A2");

    assert!(f.checker.check_access(&caller, "listVMs").await.unwrap());

    let err = f
        .checker
        .check_access(&caller, "deleteVM")
        .await
        .unwrap_err();
    assert_eq!(err.deny_reason(), Some(DenyReason::OperationNotPermitted));
}

#[tokio::test]
async fn unknown_account_never_reaches_policy_store() {
    let f = fixture();

    let err = f
        .checker
        .check_access(&Identity::for_account("ghost"), "listVMs")
        .await
        .unwrap_err();

    assert_eq!(
        err,
        DomainError::AccountNotFound {
            account_id: AccountId::from("ghost")
        }
    );
    assert_eq!(f.directory.calls.load(Ordering::SeqCst), 1);
    assert_eq!(f.store.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn granting_policy_wins_over_denying_policy() {
    let f = fixture();

    assert!(
        f.checker
            .check_access(&Identity::for_account("A3"), "createNetwork")
            .await
            .unwrap()
    );
}

#[tokio::test]
async fn operation_silent_or_denied_everywhere_is_denied() {
    let f = fixture();

    let err = f
        .checker
        .check_access(&Identity::for_account("A3"), "deleteVM")
        .await
        .unwrap_err();
    assert_eq!(err.deny_reason(), Some(DenyReason::OperationNotPermitted));
}

#[tokio::test]
async fn each_check_makes_one_lookup_per_collaborator() {
    let f = fixture();

    f.checker
        .check_access(&Identity::for_account("A2"), "listVMs")
        .await
        .unwrap();

    assert_eq!(f.directory.calls.load(Ordering::SeqCst), 1);
    assert_eq!(f.store.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn repeated_checks_give_the_same_decision() {
    let f = fixture();
    let cases = [
        ("A1", "listVMs"),
        ("A2", "listVMs"),
        ("A2", "deleteVM"),
        ("A3", "createNetwork"),
        ("ghost", "listVMs"),
    ];

    for (account, op) in cases {
        let identity = Identity::for_account(account);
        let first = f.checker.check_access(&identity, op).await;
        for _ in 0..3 {
            assert_eq!(f.checker.check_access(&identity, op).await, first);
        }
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_checks_share_one_checker() {
    let f = fixture();
    let checker = Arc::new(f.checker);

    let handles: Vec<_> = (0..64)
        .map(|i| {
            let checker = Arc::clone(&checker);
            tokio::spawn(async move {
                let (account, op, expect_allowed) = match i % 4 {
                    0 => ("A2", "listVMs", true),
                    1 => ("A2", "deleteVM", false),
                    2 => ("A3", "createNetwork", true),
                    _ => ("ghost", "listVMs", false),
                };
                let result = checker
                    .check_access(&Identity::for_account(account), op)
                    .await;
                assert_eq!(result.is_ok(), expect_allowed, "{account} / {op}");
            })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap();
    }

    assert_eq!(f.directory.calls.load(Ordering::SeqCst), 64);
    // ghost lookups (every fourth task) never reach the store
    assert_eq!(f.store.calls.load(Ordering::SeqCst), 48);
}

#[tokio::test]
async fn registered_checker_is_reachable_by_name() {
    let f = fixture();
    let registry = CheckerRegistry::new();
    let cfg = ApiAccessConfig::default();

    let client = register_checker(&registry, &cfg, f.directory.clone(), f.store.clone());

    let by_name = registry.get(&cfg.checker_name).unwrap();
    assert!(Arc::ptr_eq(&client, &by_name));

    let decision = by_name
        .decide(&Identity::for_account("A2"), "listVMs")
        .await
        .unwrap();
    assert_eq!(decision, Decision::Allowed);

    let err = registry
        .check_all(&Identity::for_account("ghost"), "listVMs")
        .await
        .unwrap_err();
    assert_eq!(err.deny_reason(), Some(DenyReason::AccountNotFound));
}
