use std::sync::Arc;

use crate::application::services::StatsService;

/// Shared application state injected into all handlers.
///
/// Everything behind the service is read-only; no per-request state is
/// shared beyond the connection pool inside the repository.
#[derive(Clone)]
pub struct AppState {
    pub stats_service: Arc<StatsService>,
}
