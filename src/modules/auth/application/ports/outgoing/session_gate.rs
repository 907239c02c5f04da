use async_trait::async_trait;
use thiserror::Error;

use crate::auth::domain::entities::Principal;

#[derive(Debug, Clone, Error)]
pub enum SessionGateError {
    #[error("session lookup failed: {0}")]
    LookupFailed(String),
}

/// Resolves a presented session token to its principal. Session issuance
/// and revocation belong to the auth provider; this service only checks
/// that a session exists and has not expired.
#[async_trait]
pub trait SessionGate: Send + Sync {
    async fn authorize(&self, token: &str) -> Result<Option<Principal>, SessionGateError>;
}
