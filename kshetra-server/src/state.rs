//! Shared service state.

use std::sync::Arc;

use kshetra_plan::PathPlanner;

/// State passed into request handlers.
///
/// Constructed once at startup. The planner is immutable after
/// construction, so concurrent requests share it without coordination.
#[derive(Clone)]
pub struct AppState {
    pub planner: Arc<PathPlanner>,
}

impl AppState {
    /// Wrap a planner for sharing across handlers.
    pub fn new(planner: PathPlanner) -> Self {
        Self {
            planner: Arc::new(planner),
        }
    }
}
