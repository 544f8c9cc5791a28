//! Startup registration for the api-access module.

use std::sync::Arc;

use api_access_sdk::{AccountDirectory, ApiAccessClient, PolicyStore};
use tracing::info;

use crate::config::ApiAccessConfig;
use crate::domain::{AccessChecker, ApiAccessLocalClient};
use crate::registry::CheckerRegistry;

/// Build the role-based checker from its collaborators and register it.
///
/// Called once by the composing application at startup. Returns the
/// registered client so the caller can keep its own handle.
#[tracing::instrument(skip_all, fields(checker = %cfg.checker_name))]
pub fn register_checker(
    registry: &CheckerRegistry,
    cfg: &ApiAccessConfig,
    accounts: Arc<dyn AccountDirectory>,
    policies: Arc<dyn PolicyStore>,
) -> Arc<dyn ApiAccessClient> {
    let checker = Arc::new(AccessChecker::with_union_evaluator(accounts, policies));
    let client: Arc<dyn ApiAccessClient> = Arc::new(ApiAccessLocalClient::new(checker));

    registry.register(cfg.checker_name.as_str(), Arc::clone(&client));
    info!(registered = registry.len(), "Registered API access checker");

    client
}
