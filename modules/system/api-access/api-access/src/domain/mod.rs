//! Domain layer for the api-access module.

pub mod error;
pub mod evaluator;
pub mod local_client;
pub mod service;

pub use error::DomainError;
pub use evaluator::UnionPolicyEvaluator;
pub use local_client::ApiAccessLocalClient;
pub use service::AccessChecker;
