//! Registry of API access checkers.
//!
//! The composing application registers each checker once at startup; the
//! request dispatch layer resolves a checker by name, or asks all of them
//! through [`CheckerRegistry::check_all`].
//!
//! Notes:
//! - Re-registering a name replaces the previous checker in place; `Arc`s
//!   already handed out stay valid.
//! - Lookups take a read lock only long enough to clone an `Arc`; no lock is
//!   held across an `.await`.

use std::sync::Arc;

use api_access_sdk::{ApiAccessClient, ApiAccessError, Identity};
use parking_lot::RwLock;

type Entry = (Arc<str>, Arc<dyn ApiAccessClient>);

/// Named, ordered set of access checkers.
#[derive(Default)]
pub struct CheckerRegistry {
    entries: RwLock<Vec<Entry>>,
}

impl CheckerRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `checker` under `name`.
    pub fn register(&self, name: impl Into<Arc<str>>, checker: Arc<dyn ApiAccessClient>) {
        let name = name.into();
        let mut w = self.entries.write();
        if let Some(slot) = w.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = checker;
        } else {
            w.push((name, checker));
        }
    }

    /// Fetch the checker registered under `name`.
    ///
    /// # Errors
    ///
    /// Returns `NoCheckerAvailable` if nothing is registered under `name`.
    pub fn get(&self, name: &str) -> Result<Arc<dyn ApiAccessClient>, ApiAccessError> {
        self.entries
            .read()
            .iter()
            .find(|(n, _)| &**n == name)
            .map(|(_, c)| Arc::clone(c))
            .ok_or(ApiAccessError::NoCheckerAvailable)
    }

    /// Remove a checker; returns it if it was present.
    pub fn remove(&self, name: &str) -> Option<Arc<dyn ApiAccessClient>> {
        let mut w = self.entries.write();
        let idx = w.iter().position(|(n, _)| &**n == name)?;
        Some(w.remove(idx).1)
    }

    /// Registered names, in registration order.
    #[must_use]
    pub fn names(&self) -> Vec<Arc<str>> {
        self.entries.read().iter().map(|(n, _)| Arc::clone(n)).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Ask every registered checker, in registration order.
    ///
    /// All checkers must allow; the first denial is returned as is.
    ///
    /// # Errors
    ///
    /// - `NoCheckerAvailable` if the registry is empty
    /// - The first error returned by any checker
    pub async fn check_all(
        &self,
        identity: &Identity,
        operation: &str,
    ) -> Result<bool, ApiAccessError> {
        let checkers: Vec<Arc<dyn ApiAccessClient>> = self
            .entries
            .read()
            .iter()
            .map(|(_, c)| Arc::clone(c))
            .collect();

        if checkers.is_empty() {
            return Err(ApiAccessError::NoCheckerAvailable);
        }

        for checker in checkers {
            if !checker.check_access(identity, operation).await? {
                return Err(ApiAccessError::OperationNotPermitted {
                    operation: operation.to_owned(),
                });
            }
        }
        Ok(true)
    }
}
