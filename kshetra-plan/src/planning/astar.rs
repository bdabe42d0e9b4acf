//! A* route search over the cost grid.
//!
//! Classic best-first search with a Euclidean heuristic. The heuristic is
//! admissible because the grid's base cost floor is 1.0 per unit of
//! distance, so it never overestimates the true remaining cost. Equal
//! f-scores are broken by insertion order: every frontier push carries a
//! monotonically increasing sequence number, making results deterministic
//! regardless of heap internals.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use crate::core::GridCoord;

use super::cost_grid::CostGrid;

const SQRT_2: f32 = std::f32::consts::SQRT_2;

/// 8-connected neighbor offsets with step lengths, cardinal moves first.
/// Enumeration order is fixed for reproducibility.
const NEIGHBORS: [(i32, i32, f32); 8] = [
    (0, 1, 1.0),
    (1, 0, 1.0),
    (0, -1, 1.0),
    (-1, 0, 1.0),
    (1, 1, SQRT_2),
    (1, -1, SQRT_2),
    (-1, 1, SQRT_2),
    (-1, -1, SQRT_2),
];

/// Node in the search frontier.
#[derive(Clone, Debug)]
struct FrontierNode {
    cell: GridCoord,
    f_score: f32,
    /// Insertion order, used as a FIFO tie-break among equal f-scores.
    seq: u64,
}

impl PartialEq for FrontierNode {
    fn eq(&self, other: &Self) -> bool {
        self.seq == other.seq
    }
}

impl Eq for FrontierNode {}

impl Ord for FrontierNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap (lower f_score = higher priority);
        // earlier insertion wins among equal f-scores.
        other
            .f_score
            .partial_cmp(&self.f_score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for FrontierNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Search for a minimum-cost route from `start` to `goal`.
///
/// The cost of a move is the destination cell's cost multiplied by the step
/// length (1.0 orthogonal, sqrt(2) diagonal); cost is charged on entry.
/// Returns `None` when the frontier empties without reaching the goal.
/// `start == goal` yields the single-element route.
pub fn find_route(grid: &CostGrid, start: GridCoord, goal: GridCoord) -> Option<Vec<GridCoord>> {
    let mut frontier = BinaryHeap::new();
    let mut came_from: HashMap<GridCoord, GridCoord> = HashMap::new();
    let mut g_score: HashMap<GridCoord, f32> = HashMap::new();
    let mut seq: u64 = 0;

    g_score.insert(start, 0.0);
    frontier.push(FrontierNode {
        cell: start,
        f_score: start.distance_to(goal),
        seq,
    });

    while let Some(current) = frontier.pop() {
        if current.cell == goal {
            return Some(reconstruct_route(&came_from, start, goal));
        }

        let current_g = *g_score.get(&current.cell).unwrap_or(&f32::INFINITY);

        for &(dx, dy, step) in &NEIGHBORS {
            let next = GridCoord::new(current.cell.x + dx, current.cell.y + dy);
            if !grid.contains(next) {
                continue;
            }

            let tentative_g = current_g + grid.cost(next) * step;

            if tentative_g < *g_score.get(&next).unwrap_or(&f32::INFINITY) {
                came_from.insert(next, current.cell);
                g_score.insert(next, tentative_g);

                seq += 1;
                frontier.push(FrontierNode {
                    cell: next,
                    f_score: tentative_g + next.distance_to(goal),
                    seq,
                });
            }
        }
    }

    None
}

/// Walk parent links from goal back to start and reverse.
fn reconstruct_route(
    came_from: &HashMap<GridCoord, GridCoord>,
    start: GridCoord,
    goal: GridCoord,
) -> Vec<GridCoord> {
    let mut route = vec![goal];
    let mut current = goal;

    while current != start {
        match came_from.get(&current) {
            Some(&prev) => {
                route.push(prev);
                current = prev;
            }
            None => break,
        }
    }

    route.reverse();
    route
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_grid(width: usize, height: usize) -> CostGrid {
        CostGrid::new(width, height).unwrap()
    }

    fn assert_contiguous(route: &[GridCoord]) {
        for pair in route.windows(2) {
            let dx = (pair[1].x - pair[0].x).abs();
            let dy = (pair[1].y - pair[0].y).abs();
            assert!(dx <= 1 && dy <= 1, "non-adjacent step {:?} -> {:?}", pair[0], pair[1]);
            assert!(dx + dy > 0, "route revisits {:?}", pair[0]);
        }
    }

    #[test]
    fn test_diagonal_route_on_open_grid() {
        let grid = open_grid(5, 5);
        let route = find_route(&grid, GridCoord::new(0, 0), GridCoord::new(4, 4)).unwrap();

        // On a hazard-free grid the Chebyshev-optimal route is the pure
        // diagonal: five cells from corner to corner.
        assert_eq!(route.len(), 5);
        for (i, cell) in route.iter().enumerate() {
            assert_eq!(*cell, GridCoord::new(i as i32, i as i32));
        }
    }

    #[test]
    fn test_start_equals_goal() {
        let grid = open_grid(5, 5);
        let route = find_route(&grid, GridCoord::new(2, 3), GridCoord::new(2, 3)).unwrap();
        assert_eq!(route, vec![GridCoord::new(2, 3)]);
    }

    #[test]
    fn test_route_endpoints_and_contiguity() {
        let hazard = crate::core::Hazard::new(5, 5, 2, 1.0);
        let mut grid = CostGrid::from_hazards(11, 11, &[hazard]).unwrap();
        grid.shape_obstacles(0.75);

        let start = GridCoord::new(0, 5);
        let goal = GridCoord::new(10, 5);
        let route = find_route(&grid, start, goal).unwrap();

        assert_eq!(*route.first().unwrap(), start);
        assert_eq!(*route.last().unwrap(), goal);
        assert_contiguous(&route);
    }

    #[test]
    fn test_avoids_expensive_cells() {
        // A cheap corridor along y=0 and an expensive band elsewhere.
        let mut grid = open_grid(8, 4);
        for x in 0..8 {
            for y in 1..4 {
                let hazard = crate::core::Hazard::new(x, y, 0, 10.0);
                grid.add_hazard(&hazard);
            }
        }

        let route = find_route(&grid, GridCoord::new(0, 0), GridCoord::new(7, 0)).unwrap();
        for cell in &route {
            assert_eq!(cell.y, 0, "route strayed into the expensive band");
        }
    }

    #[test]
    fn test_soft_wall_is_crossed() {
        // A shaped wall across the full grid height is the only connector;
        // the route must pass through it rather than fail.
        let mut grid = open_grid(9, 5);
        for y in 0..5 {
            grid.add_hazard(&crate::core::Hazard::new(4, y, 0, 1.0));
        }
        grid.shape_obstacles(0.1);

        let route = find_route(&grid, GridCoord::new(0, 2), GridCoord::new(8, 2)).unwrap();
        assert!(route.iter().any(|c| c.x == 4), "route never crossed the wall");
    }

    #[test]
    fn test_deterministic() {
        let hazards = [
            crate::core::Hazard::new(3, 3, 2, 0.9),
            crate::core::Hazard::new(7, 6, 1, 0.6),
        ];
        let mut grid = CostGrid::from_hazards(12, 10, &hazards).unwrap();
        grid.shape_obstacles(0.75);

        let a = find_route(&grid, GridCoord::new(0, 0), GridCoord::new(11, 9));
        let b = find_route(&grid, GridCoord::new(0, 0), GridCoord::new(11, 9));
        assert_eq!(a, b);
    }

    #[test]
    fn test_unreachable_goal() {
        // A ring of non-finite cost around the goal: entering any ring cell
        // costs infinity, so the frontier drains without reaching it.
        let mut grid = open_grid(7, 7);
        for y in 0..7i32 {
            for x in 0..7i32 {
                let on_ring = (x - 5).abs().max((y - 5).abs()) == 1;
                if on_ring {
                    grid.add_hazard(&crate::core::Hazard::new(x, y, 0, f32::INFINITY));
                }
            }
        }

        let route = find_route(&grid, GridCoord::new(0, 0), GridCoord::new(5, 5));
        assert!(route.is_none());
    }
}
