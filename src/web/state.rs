use crate::dashboard::Dashboard;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    pub dashboard: Dashboard,
}

impl AppState {
    pub fn new(dashboard: Dashboard) -> Self { Self { dashboard } }
}
