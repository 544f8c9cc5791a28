//! Default policy evaluator.

use api_access_sdk::{AccessPolicy, PolicyEvaluator};

/// Permissive-union evaluator: an operation is allowed if any policy
/// grants it. Policy order is irrelevant and an empty set allows nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnionPolicyEvaluator;

impl PolicyEvaluator for UnionPolicyEvaluator {
    fn is_allowed(&self, operation: &str, policies: &[AccessPolicy]) -> bool {
        policies.iter().any(|p| p.grants(operation))
    }
}
