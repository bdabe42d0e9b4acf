//! Plan a route across the demo hazard field and render it to SVG.
//!
//! ```bash
//! cargo run --example plan_demo
//! open output/plan_demo.svg
//! ```

use std::path::Path;

use kshetra_plan::io::{SvgConfig, SvgVisualizer};
use kshetra_plan::{CostGrid, GridCoord, PathPlanner, RouteQuery};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("kshetra_plan=info".parse()?),
        )
        .init();

    let planner = PathPlanner::with_defaults();

    let query = RouteQuery {
        width: 40,
        height: 30,
        start: GridCoord::new(0, 0),
        goal: GridCoord::new(39, 29),
        hazards: Vec::new(),
        obstacle_threshold: None,
    };

    let plan = planner.plan_route(&query)?;
    println!(
        "Planned {} cells across {} hazards",
        plan.path.len(),
        plan.hazards.len()
    );

    for hazard in &plan.hazards {
        let level = hazard.severity_level();
        println!(
            "  hazard at ({:>2},{:>2}) r={} severity={:.2} [{}]",
            hazard.x,
            hazard.y,
            hazard.radius,
            hazard.severity,
            level.label()
        );
    }

    let grid = CostGrid::from_hazards(plan.width, plan.height, &plan.hazards)?;

    let out_dir = Path::new("output");
    std::fs::create_dir_all(out_dir)?;
    let svg_path = out_dir.join("plan_demo.svg");

    SvgVisualizer::new(grid, SvgConfig::default())
        .with_title("Demo Hazard Field")
        .with_hazards(plan.hazards)
        .with_route(plan.path)
        .save(&svg_path)?;

    println!("SVG saved to {:?}", svg_path);
    Ok(())
}
