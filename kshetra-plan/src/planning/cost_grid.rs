//! Traversal cost grid rasterized from point hazards.
//!
//! Every cell starts at the base traversal cost. Each hazard adds a
//! severity-scaled contribution to the cells inside its influence radius;
//! overlapping hazards accumulate by summation. A threshold pass then
//! multiplies near-hazard cells into soft obstacles: strongly disfavored
//! but never impassable.

use crate::core::{GridCoord, Hazard};
use crate::error::{PlanningError, Result};

/// Base traversal cost of an unaffected cell.
pub const BASE_COST: f32 = 1.0;

/// Multiplier applied to cells past the soft-obstacle cutoff.
pub const OBSTACLE_PENALTY: f32 = 10.0;

/// Scale mapping the obstacle threshold into a cost cutoff:
/// cells above `BASE_COST + threshold * THRESHOLD_SPAN` are penalized.
pub const THRESHOLD_SPAN: f32 = 5.0;

/// Dense per-cell traversal cost surface.
///
/// Costs are stored row-major. The builder maintains the invariant that
/// every cell cost is at least [`BASE_COST`]: hazards only add cost.
#[derive(Clone, Debug)]
pub struct CostGrid {
    width: usize,
    height: usize,
    costs: Vec<f32>,
}

impl CostGrid {
    /// Create a grid with every cell at the base traversal cost.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(PlanningError::EmptyGrid { width, height });
        }
        Ok(Self {
            width,
            height,
            costs: vec![BASE_COST; width * height],
        })
    }

    /// Build a grid and rasterize every hazard into it.
    pub fn from_hazards(width: usize, height: usize, hazards: &[Hazard]) -> Result<Self> {
        let mut grid = Self::new(width, height)?;
        for hazard in hazards {
            grid.add_hazard(hazard);
        }
        Ok(grid)
    }

    /// Add one hazard's cost contribution.
    ///
    /// Every in-bounds cell within Euclidean distance `radius + 0.5` of the
    /// center receives `1.0 + severity * (1.0 + (radius - dist))`, so cost
    /// rises quickly toward the core. Centers outside the grid contribute
    /// to whatever part of their influence circle is in bounds.
    pub fn add_hazard(&mut self, hazard: &Hazard) {
        let reach = hazard.radius as i32 + 1;
        let influence = hazard.radius as f32 + 0.5;

        for dy in -reach..=reach {
            for dx in -reach..=reach {
                let cell = GridCoord::new(hazard.x + dx, hazard.y + dy);
                if !self.contains(cell) {
                    continue;
                }

                let dist = ((dx * dx + dy * dy) as f32).sqrt();
                if dist <= influence {
                    let add_cost = 1.0 + hazard.severity * (1.0 + (hazard.radius as f32 - dist));
                    let idx = self.index(cell);
                    self.costs[idx] += add_cost;
                }
            }
        }
    }

    /// Apply the soft-obstacle penalty.
    ///
    /// Cells whose cost exceeds `BASE_COST + threshold * THRESHOLD_SPAN`
    /// are multiplied by [`OBSTACLE_PENALTY`]. The result is expensive but
    /// finite, so a route through remains possible when no alternative
    /// exists.
    pub fn shape_obstacles(&mut self, threshold: f32) {
        let cutoff = BASE_COST + threshold * THRESHOLD_SPAN;
        for cost in &mut self.costs {
            if *cost > cutoff {
                *cost *= OBSTACLE_PENALTY;
            }
        }
    }

    /// A copy of the grid with every cost multiplied by `factor`.
    ///
    /// Used by the relaxation fallback. Uniform scaling preserves the
    /// relative ordering of path costs, so this cannot connect a goal that
    /// is genuinely unreachable.
    pub fn relaxed(&self, factor: f32) -> Self {
        Self {
            width: self.width,
            height: self.height,
            costs: self.costs.iter().map(|cost| cost * factor).collect(),
        }
    }

    /// Grid width in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Is the coordinate inside the grid?
    pub fn contains(&self, coord: GridCoord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && (coord.x as usize) < self.width
            && (coord.y as usize) < self.height
    }

    /// Traversal cost of a cell; out-of-bounds coordinates are infinitely
    /// expensive.
    pub fn cost(&self, coord: GridCoord) -> f32 {
        if !self.contains(coord) {
            return f32::INFINITY;
        }
        self.costs[self.index(coord)]
    }

    /// Highest cost in the grid.
    pub fn max_cost(&self) -> f32 {
        self.costs.iter().copied().fold(BASE_COST, f32::max)
    }

    fn index(&self, coord: GridCoord) -> usize {
        (coord.y as usize) * self.width + (coord.x as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_grid() {
        let grid = CostGrid::new(10, 8).unwrap();
        assert_eq!(grid.width(), 10);
        assert_eq!(grid.height(), 8);
        for y in 0..8 {
            for x in 0..10 {
                assert_eq!(grid.cost(GridCoord::new(x, y)), BASE_COST);
            }
        }
    }

    #[test]
    fn test_empty_grid_rejected() {
        assert!(matches!(
            CostGrid::new(0, 30),
            Err(PlanningError::EmptyGrid { .. })
        ));
        assert!(matches!(
            CostGrid::new(40, 0),
            Err(PlanningError::EmptyGrid { .. })
        ));
    }

    #[test]
    fn test_single_hazard_contributions() {
        let hazard = Hazard::new(5, 5, 2, 1.0);
        let grid = CostGrid::from_hazards(12, 12, &[hazard]).unwrap();

        // Core contribution: 1 + 1.0 * (1 + (2 - 0)) = 4.0 over the base.
        let core = grid.cost(GridCoord::new(5, 5));
        assert!((core - BASE_COST - 4.0).abs() < 1e-5, "core = {core}");

        // Boundary cell at distance 2: contribution 1 + 1.0 * (1 + 0) = 2.0.
        let edge = grid.cost(GridCoord::new(7, 5));
        assert!((edge - BASE_COST - 2.0).abs() < 1e-5, "edge = {edge}");

        // Outside the influence radius the base cost is untouched.
        assert_eq!(grid.cost(GridCoord::new(9, 5)), BASE_COST);
    }

    #[test]
    fn test_overlapping_hazards_sum() {
        let a = Hazard::new(5, 5, 2, 0.5);
        let b = Hazard::new(6, 5, 2, 0.5);
        let grid = CostGrid::from_hazards(12, 12, &[a, b]).unwrap();

        let mut only_a = CostGrid::new(12, 12).unwrap();
        only_a.add_hazard(&a);
        let mut only_b = CostGrid::new(12, 12).unwrap();
        only_b.add_hazard(&b);

        let cell = GridCoord::new(5, 5);
        let expected = only_a.cost(cell) + only_b.cost(cell) - BASE_COST;
        assert!((grid.cost(cell) - expected).abs() < 1e-5);
    }

    #[test]
    fn test_costs_never_below_base() {
        let hazards = [
            Hazard::new(3, 3, 2, 1.0),
            Hazard::new(8, 4, 3, 0.4),
            Hazard::new(-2, 5, 2, 0.9),
        ];
        let mut grid = CostGrid::from_hazards(12, 10, &hazards).unwrap();
        grid.shape_obstacles(0.75);

        for y in 0..10 {
            for x in 0..12 {
                assert!(grid.cost(GridCoord::new(x, y)) >= BASE_COST);
            }
        }
    }

    #[test]
    fn test_shape_obstacles() {
        let hazard = Hazard::new(5, 5, 2, 1.0);
        let mut grid = CostGrid::from_hazards(12, 12, &[hazard]).unwrap();

        // Core cell cost is 5.0; default cutoff is 1 + 0.75 * 5 = 4.75.
        grid.shape_obstacles(0.75);
        assert!((grid.cost(GridCoord::new(5, 5)) - 50.0).abs() < 1e-4);

        // The distance-2 boundary cell (cost 3.0) stays below the cutoff.
        assert!((grid.cost(GridCoord::new(7, 5)) - 3.0).abs() < 1e-5);
    }

    #[test]
    fn test_offgrid_hazard_clipped() {
        let hazard = Hazard::new(-1, 0, 2, 1.0);
        let grid = CostGrid::from_hazards(8, 8, &[hazard]).unwrap();

        // In-bounds part of the influence circle is affected.
        assert!(grid.cost(GridCoord::new(0, 0)) > BASE_COST);
        // Far cells are untouched.
        assert_eq!(grid.cost(GridCoord::new(6, 6)), BASE_COST);
    }

    #[test]
    fn test_relaxed_scales_uniformly() {
        let hazard = Hazard::new(4, 4, 2, 1.0);
        let grid = CostGrid::from_hazards(10, 10, &[hazard]).unwrap();
        let relaxed = grid.relaxed(0.5);

        for y in 0..10 {
            for x in 0..10 {
                let cell = GridCoord::new(x, y);
                assert!((relaxed.cost(cell) - grid.cost(cell) * 0.5).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn test_out_of_bounds_cost() {
        let grid = CostGrid::new(5, 5).unwrap();
        assert_eq!(grid.cost(GridCoord::new(-1, 0)), f32::INFINITY);
        assert_eq!(grid.cost(GridCoord::new(5, 0)), f32::INFINITY);
    }
}
