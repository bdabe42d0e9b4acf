//! # KshetraPlan
//!
//! Hazard-aware traversal cost grids and minimum-cost route planning.
//!
//! ## Overview
//!
//! KshetraPlan plans routes across a rectangular field containing point
//! hazards, each described by a center cell, an influence radius, and a
//! severity score:
//!
//! - **Cost grid** - Dense per-cell traversal costs rasterized from hazards
//! - **Soft obstacles** - Cells past a severity threshold are steeply
//!   penalized but never impassable
//! - **A\* search** - Deterministic best-first search over the 8-connected
//!   grid with a Euclidean heuristic
//! - **Relaxation fallback** - A single retry on a uniformly scaled grid
//!   when the primary search fails
//!
//! ## Quick Start
//!
//! ```rust
//! use kshetra_plan::{GridCoord, Hazard, PathPlanner, RouteQuery};
//!
//! let planner = PathPlanner::with_defaults();
//!
//! let query = RouteQuery {
//!     width: 40,
//!     height: 30,
//!     start: GridCoord::new(0, 0),
//!     goal: GridCoord::new(39, 29),
//!     hazards: vec![Hazard::new(10, 12, 2, 0.9)],
//!     obstacle_threshold: None,
//! };
//!
//! let plan = planner.plan_route(&query).unwrap();
//! println!("Route has {} cells", plan.path.len());
//! ```
//!
//! ## Coordinate System
//!
//! Cells are addressed by integer `(x, y)` with `0 <= x < width` and
//! `0 <= y < height`. Routes are 8-connected: consecutive cells differ by
//! at most 1 in each axis.

// Core types
pub mod core;

// Error types
pub mod error;

// Planner configuration
pub mod config;

// Deterministic demo hazard fields
pub mod field;

// Cost grids and route search
pub mod planning;

// SVG rendering of planned fields
pub mod io;

// Re-export commonly used types
pub use config::PlannerConfig;
pub use core::{GridCoord, Hazard, SeverityLevel};
pub use error::{PlanningError, Result};
pub use planning::{CostGrid, PathPlanner, RoutePlan, RouteQuery, BASE_COST};
