//! Jobs domain state and auth backend integration

use crate::repository::JobStore;
use axum::extract::FromRef;
use jobboard_auth::AuthBackend;
use std::sync::Arc;

/// Application state for the Jobs domain
#[derive(Clone)]
pub struct JobsState {
    pub jobs: Arc<dyn JobStore>,
    pub auth: AuthBackend,
}

impl FromRef<JobsState> for AuthBackend {
    fn from_ref(state: &JobsState) -> Self {
        state.auth.clone()
    }
}
