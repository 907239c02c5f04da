use uuid::Uuid;

/// The identity behind a live admin session. The content endpoints only
/// care that a principal exists; roles and profiles live in the auth
/// provider, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub user_id: Uuid,
}
