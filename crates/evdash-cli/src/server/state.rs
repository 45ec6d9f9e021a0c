//! Application state for the web server.

use std::sync::Arc;

use evdash::DashboardContext;

/// Shared application state.
///
/// The context is immutable after startup, so handlers read it without locks.
#[derive(Clone)]
pub struct AppState {
    pub context: Arc<DashboardContext>,
}

impl AppState {
    pub fn new(context: DashboardContext) -> Self {
        Self {
            context: Arc::new(context),
        }
    }
}
