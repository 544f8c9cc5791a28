//! Collaborator implementations for the static API access plugin.
//!
//! Implements `AccountDirectory` and `PolicyStore` using the domain service.

use api_access_sdk::{
    AccessPolicy, Account, AccountDirectory, AccountId, ApiAccessError, PolicyStore,
};
use async_trait::async_trait;

use super::service::Service;

#[async_trait]
impl AccountDirectory for Service {
    async fn resolve(&self, account_id: &AccountId) -> Result<Option<Account>, ApiAccessError> {
        Ok(self.accounts.get(account_id).cloned())
    }
}

#[async_trait]
impl PolicyStore for Service {
    async fn policies_for(
        &self,
        account_id: &AccountId,
    ) -> Result<Vec<AccessPolicy>, ApiAccessError> {
        Ok(self.bindings.get(account_id).cloned().unwrap_or_default())
    }
}
