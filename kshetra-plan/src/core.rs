//! Core types shared across the planning stack.

use serde::{Deserialize, Serialize};

/// Integer cell coordinate on the traversal grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridCoord {
    /// Column index
    pub x: i32,
    /// Row index
    pub y: i32,
}

impl GridCoord {
    /// Create a new grid coordinate.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another coordinate.
    pub fn distance_to(&self, other: GridCoord) -> f32 {
        let dx = (other.x - self.x) as f32;
        let dy = (other.y - self.y) as f32;
        (dx * dx + dy * dy).sqrt()
    }

    /// Clamp the coordinate into `[0, width-1] x [0, height-1]`.
    pub fn clamped(&self, width: usize, height: usize) -> GridCoord {
        GridCoord {
            x: self.x.clamp(0, width as i32 - 1),
            y: self.y.clamp(0, height as i32 - 1),
        }
    }
}

/// A circular region of elevated traversal cost.
///
/// `radius` and `severity` may be omitted from serialized input; they
/// default to 2 cells and 0.8 so partially specified hazards stay usable.
/// Severity is conventionally in `[0, 1]` but is not enforced.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Hazard {
    /// Center column
    pub x: i32,

    /// Center row
    pub y: i32,

    /// Influence radius in cells
    #[serde(default = "default_radius")]
    pub radius: u32,

    /// Severity score, conventionally in `[0, 1]`
    #[serde(default = "default_severity")]
    pub severity: f32,
}

impl Hazard {
    /// Create a new hazard.
    pub fn new(x: i32, y: i32, radius: u32, severity: f32) -> Self {
        Self {
            x,
            y,
            radius,
            severity,
        }
    }

    /// Center cell of the hazard.
    pub fn center(&self) -> GridCoord {
        GridCoord::new(self.x, self.y)
    }

    /// Grade the hazard's severity into a display band.
    pub fn severity_level(&self) -> SeverityLevel {
        SeverityLevel::from_score(self.severity)
    }
}

fn default_radius() -> u32 {
    2
}

fn default_severity() -> f32 {
    0.8
}

/// Display band for a severity score.
///
/// Band edges (0.25 / 0.50 / 0.75) and colors match the grading used by
/// the detection side of the system. Grading never influences planning;
/// it only drives visualization and log output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeverityLevel {
    /// Score below 0.25
    Low,
    /// Score in [0.25, 0.50)
    Moderate,
    /// Score in [0.50, 0.75)
    High,
    /// Score 0.75 and above
    Critical,
}

impl SeverityLevel {
    /// Grade a severity score into its band.
    pub fn from_score(score: f32) -> Self {
        if score < 0.25 {
            SeverityLevel::Low
        } else if score < 0.50 {
            SeverityLevel::Moderate
        } else if score < 0.75 {
            SeverityLevel::High
        } else {
            SeverityLevel::Critical
        }
    }

    /// Uppercase display label.
    pub fn label(&self) -> &'static str {
        match self {
            SeverityLevel::Low => "LOW",
            SeverityLevel::Moderate => "MODERATE",
            SeverityLevel::High => "HIGH",
            SeverityLevel::Critical => "CRITICAL",
        }
    }

    /// Display color (hex).
    pub fn color(&self) -> &'static str {
        match self {
            SeverityLevel::Low => "#16a34a",
            SeverityLevel::Moderate => "#f59e0b",
            SeverityLevel::High => "#f97316",
            SeverityLevel::Critical => "#ef4444",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance() {
        let a = GridCoord::new(0, 0);
        let b = GridCoord::new(3, 4);
        assert!((a.distance_to(b) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_clamped() {
        let c = GridCoord::new(-5, 100);
        let clamped = c.clamped(40, 30);
        assert_eq!(clamped, GridCoord::new(0, 29));

        let inside = GridCoord::new(10, 10).clamped(40, 30);
        assert_eq!(inside, GridCoord::new(10, 10));
    }

    #[test]
    fn test_hazard_field_defaults() {
        let hazard: Hazard = serde_json::from_str(r#"{"x": 10, "y": 12}"#).unwrap();
        assert_eq!(hazard.radius, 2);
        assert!((hazard.severity - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_severity_bands() {
        assert_eq!(SeverityLevel::from_score(0.1), SeverityLevel::Low);
        assert_eq!(SeverityLevel::from_score(0.25), SeverityLevel::Moderate);
        assert_eq!(SeverityLevel::from_score(0.6), SeverityLevel::High);
        assert_eq!(SeverityLevel::from_score(0.75), SeverityLevel::Critical);
        assert_eq!(SeverityLevel::from_score(2.0), SeverityLevel::Critical);
    }
}
