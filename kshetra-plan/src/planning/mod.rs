//! Cost grids and route search.
//!
//! This module provides:
//! - Cost grid rasterization from point hazards with soft-obstacle shaping
//! - A* route search over the 8-connected grid
//! - The request-level planner with its single relaxation fallback

mod astar;
mod cost_grid;
mod planner;

pub use cost_grid::{CostGrid, BASE_COST, OBSTACLE_PENALTY, THRESHOLD_SPAN};
pub use planner::{PathPlanner, RoutePlan, RouteQuery};
