//! Acting identity for authenticated requests

use uuid::Uuid;

/// The user on whose behalf the current request executes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthContext {
    pub user_id: Uuid,
}

impl AuthContext {
    pub fn new(user_id: Uuid) -> Self {
        Self { user_id }
    }
}
