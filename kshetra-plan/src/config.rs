//! Planner configuration.

use serde::Deserialize;

/// Configuration for the path planner.
///
/// All fields default when absent from serialized input, so a config file
/// only needs the values it overrides.
#[derive(Clone, Debug, Deserialize)]
pub struct PlannerConfig {
    /// Severity threshold above which cells receive the soft-obstacle
    /// penalty. Requests may override this per call.
    #[serde(default = "default_obstacle_threshold")]
    pub obstacle_threshold: f32,

    /// Uniform cost multiplier applied before the single retry when the
    /// primary search fails.
    #[serde(default = "default_relaxation_factor")]
    pub relaxation_factor: f32,

    /// Number of hazards generated when a request supplies none.
    #[serde(default = "default_demo_hazard_count")]
    pub demo_hazard_count: usize,

    /// Seed for the demo hazard generator. Fixed so repeated requests
    /// produce identical fields.
    #[serde(default = "default_demo_seed")]
    pub demo_seed: u64,

    /// Margin in cells kept between generated hazards and the grid edges.
    #[serde(default = "default_edge_margin")]
    pub edge_margin: u32,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            obstacle_threshold: default_obstacle_threshold(),
            relaxation_factor: default_relaxation_factor(),
            demo_hazard_count: default_demo_hazard_count(),
            demo_seed: default_demo_seed(),
            edge_margin: default_edge_margin(),
        }
    }
}

// Default value functions
fn default_obstacle_threshold() -> f32 {
    0.75
}
fn default_relaxation_factor() -> f32 {
    0.5
}
fn default_demo_hazard_count() -> usize {
    6
}
fn default_demo_seed() -> u64 {
    42
}
fn default_edge_margin() -> u32 {
    2
}
