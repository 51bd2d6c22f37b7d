//! JWT claims types

use serde::{Deserialize, Serialize};

/// Session token claims
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Acting user ID
    #[serde(rename = "userId", alias = "sub")]
    pub user_id: String,
    /// Issued at
    #[serde(default)]
    pub iat: u64,
    /// Expires at
    pub exp: u64,
}
