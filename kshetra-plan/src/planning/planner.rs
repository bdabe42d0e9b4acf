//! Request-level planning orchestration.
//!
//! One planning request runs the fixed pipeline
//! build -> shape -> search, with a single relaxation retry when the
//! primary search fails. Every invocation owns its grid and search state;
//! the planner itself is immutable and can be shared freely between
//! concurrent requests.

use tracing::{debug, info};

use crate::config::PlannerConfig;
use crate::core::{GridCoord, Hazard};
use crate::error::Result;
use crate::field;

use super::astar;
use super::cost_grid::CostGrid;

/// A planning request resolved to concrete values.
#[derive(Clone, Debug)]
pub struct RouteQuery {
    /// Field width in cells
    pub width: usize,
    /// Field height in cells
    pub height: usize,
    /// Start cell; clamped into bounds before search
    pub start: GridCoord,
    /// Goal cell; clamped into bounds before search
    pub goal: GridCoord,
    /// Known hazards; an empty list selects the deterministic demo field
    pub hazards: Vec<Hazard>,
    /// Per-request override of the configured obstacle threshold
    pub obstacle_threshold: Option<f32>,
}

/// Outcome of a planning request.
#[derive(Clone, Debug)]
pub struct RoutePlan {
    /// Field width in cells
    pub width: usize,
    /// Field height in cells
    pub height: usize,
    /// The hazards the route was planned against (supplied or generated)
    pub hazards: Vec<Hazard>,
    /// Planned route, start first; empty when the goal is unreachable
    pub path: Vec<GridCoord>,
    /// Whether the relaxation fallback pass ran
    pub relaxed: bool,
}

/// Hazard-aware route planner.
pub struct PathPlanner {
    config: PlannerConfig,
}

impl PathPlanner {
    /// Create a planner with the given configuration.
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    /// Create a planner with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(PlannerConfig::default())
    }

    /// The planner's configuration.
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Plan a route across the field described by `query`.
    ///
    /// An unreachable goal is not an error: the plan carries an empty path.
    /// The only error is a degenerate grid (zero width or height), raised
    /// before any cell is allocated.
    pub fn plan_route(&self, query: &RouteQuery) -> Result<RoutePlan> {
        let hazards = if query.hazards.is_empty() {
            debug!(
                "No hazards supplied, generating demo field (seed {})",
                self.config.demo_seed
            );
            field::generate_demo_field(
                query.width,
                query.height,
                self.config.demo_hazard_count,
                self.config.edge_margin,
                self.config.demo_seed,
            )
        } else {
            query.hazards.clone()
        };

        let mut grid = CostGrid::from_hazards(query.width, query.height, &hazards)?;

        let threshold = query
            .obstacle_threshold
            .unwrap_or(self.config.obstacle_threshold);
        grid.shape_obstacles(threshold);

        let start = query.start.clamped(query.width, query.height);
        let goal = query.goal.clamped(query.width, query.height);

        let mut relaxed = false;
        let path = match astar::find_route(&grid, start, goal) {
            Some(route) => route,
            None => {
                // Single deterministic retry on a uniformly scaled grid.
                // Scaling preserves relative path ordering, so this only
                // changes the outcome when the first failure came from
                // numeric saturation rather than genuine disconnection.
                relaxed = true;
                debug!("Primary search failed, retrying on relaxed grid");
                let fallback = grid.relaxed(self.config.relaxation_factor);
                astar::find_route(&fallback, start, goal).unwrap_or_default()
            }
        };

        info!(
            "Planned route start=({},{}) goal=({},{}) hazards={} path_len={} relaxed={}",
            start.x,
            start.y,
            goal.x,
            goal.y,
            hazards.len(),
            path.len(),
            relaxed
        );

        Ok(RoutePlan {
            width: query.width,
            height: query.height,
            hazards,
            path,
            relaxed,
        })
    }
}
