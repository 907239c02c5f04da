use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use sha2::{Digest, Sha256};
use std::sync::Arc;

use crate::auth::application::ports::outgoing::{SessionGate, SessionGateError};
use crate::auth::domain::entities::Principal;

use super::sea_orm_entity::sessions::{Column, Entity as Sessions};

/// Looks sessions up in the shared `sessions` table written by the auth
/// provider. Only hashed tokens are stored, so the presented token is
/// hashed before the lookup.
#[derive(Debug, Clone)]
pub struct SessionGatePostgres {
    db: Arc<DatabaseConnection>,
}

impl SessionGatePostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[async_trait]
impl SessionGate for SessionGatePostgres {
    async fn authorize(&self, token: &str) -> Result<Option<Principal>, SessionGateError> {
        let digest = hash_token(token);

        let session = Sessions::find()
            .filter(Column::TokenHash.eq(&digest))
            .one(&*self.db)
            .await
            .map_err(|e| SessionGateError::LookupFailed(e.to_string()))?;

        Ok(session
            .filter(|s| s.expires_at > Utc::now())
            .map(|s| Principal { user_id: s.user_id }))
    }
}
