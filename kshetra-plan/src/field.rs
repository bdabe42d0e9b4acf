//! Deterministic demo hazard fields.
//!
//! When a planning request supplies no hazards, the planner fills the field
//! with a fixed-seed random layout so demo output is reproducible: two
//! requests with the same dimensions always see the same hazards.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::core::Hazard;

/// Documented seed for demo field generation.
pub const DEMO_FIELD_SEED: u64 = 42;

/// Generated hazard radii span `[1, 3]` cells.
const RADIUS_RANGE: std::ops::RangeInclusive<u32> = 1..=3;

/// Generated severities span `[0.4, 1.0]`, rounded to two decimals.
const SEVERITY_RANGE: std::ops::RangeInclusive<f32> = 0.4..=1.0;

/// Generate `count` hazards inside a `width x height` field.
///
/// Centers keep `margin` cells of clearance from the grid edges when the
/// field is large enough; smaller fields fall back to the full axis range.
/// The generator is seeded per call, so identical arguments always produce
/// an identical field.
pub fn generate_demo_field(
    width: usize,
    height: usize,
    count: usize,
    margin: u32,
    seed: u64,
) -> Vec<Hazard> {
    let mut rng = StdRng::seed_from_u64(seed);

    let x_range = axis_range(width, margin);
    let y_range = axis_range(height, margin);

    let mut hazards = Vec::with_capacity(count);
    for _ in 0..count {
        let x = rng.gen_range(x_range.clone());
        let y = rng.gen_range(y_range.clone());
        let severity = round2(rng.gen_range(SEVERITY_RANGE));
        let radius = rng.gen_range(RADIUS_RANGE);
        hazards.push(Hazard::new(x, y, radius, severity));
    }

    hazards
}

/// Inclusive center range along one axis, honoring the edge margin when the
/// axis is long enough to leave at least one candidate cell.
fn axis_range(len: usize, margin: u32) -> std::ops::RangeInclusive<i32> {
    let len = len as i32;
    let margin = margin as i32;
    if len > 2 * margin {
        margin..=(len - margin - 1)
    } else {
        0..=(len - 1)
    }
}

fn round2(value: f32) -> f32 {
    (value * 100.0).round() / 100.0
}
