//! SVG rendering of planned hazard fields.
//!
//! Renders the traversal cost surface, hazard influence circles, and the
//! planned route to SVG as an audit file: cost shading shows what the
//! planner saw, circle colors follow severity grading, and the polyline is
//! the route it chose.

use std::fmt::Write;
use std::path::Path;

use crate::core::{GridCoord, Hazard};
use crate::planning::{CostGrid, BASE_COST};

/// SVG color scheme for visualization
#[derive(Clone, Debug)]
pub struct SvgColorScheme {
    /// Page background
    pub background: &'static str,
    /// Base field color
    pub field: &'static str,
    /// Cost shading color (opacity scales with cost)
    pub cost_shade: &'static str,
    /// Route polyline color
    pub route: &'static str,
    /// Start marker color
    pub start: &'static str,
    /// Goal marker color
    pub goal: &'static str,
}

impl Default for SvgColorScheme {
    fn default() -> Self {
        Self {
            background: "#F8F8F8",
            field: "#FFFFFF",
            cost_shade: "#B91C1C",
            route: "#2222AA",
            start: "#22AA22",
            goal: "#AA2222",
        }
    }
}

/// Configuration for SVG rendering
#[derive(Clone, Debug)]
pub struct SvgConfig {
    /// Pixels per cell
    pub cell_size: f32,
    /// Route line width
    pub route_width: f32,
    /// Start/goal marker radius
    pub marker_radius: f32,
    /// Color scheme
    pub colors: SvgColorScheme,
    /// Padding around the field in pixels
    pub padding: f32,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            cell_size: 16.0,
            route_width: 3.0,
            marker_radius: 5.0,
            colors: SvgColorScheme::default(),
            padding: 20.0,
        }
    }
}

/// SVG visualization builder
pub struct SvgVisualizer {
    config: SvgConfig,
    /// Cost grid to shade
    grid: CostGrid,
    /// Hazards to outline
    hazards: Vec<Hazard>,
    /// Planned route
    route: Vec<GridCoord>,
    /// Title to display
    title: Option<String>,
}

impl SvgVisualizer {
    /// Create a new SVG visualizer
    pub fn new(grid: CostGrid, config: SvgConfig) -> Self {
        Self {
            config,
            grid,
            hazards: Vec::new(),
            route: Vec::new(),
            title: None,
        }
    }

    /// Set a title to display
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Add hazard influence circles
    pub fn with_hazards(mut self, hazards: Vec<Hazard>) -> Self {
        self.hazards = hazards;
        self
    }

    /// Add the planned route
    pub fn with_route(mut self, route: Vec<GridCoord>) -> Self {
        self.route = route;
        self
    }

    /// Render to SVG string
    pub fn render(&self) -> String {
        let mut svg = String::new();

        let cell = self.config.cell_size;
        let field_width_px = self.grid.width() as f32 * cell;
        let field_height_px = self.grid.height() as f32 * cell;

        let padding = self.config.padding;
        let title_height = if self.title.is_some() { 30.0 } else { 0.0 };

        let width = field_width_px + 2.0 * padding;
        let height = field_height_px + 2.0 * padding + title_height;

        // SVG header
        writeln!(&mut svg, r#"<?xml version="1.0" encoding="UTF-8"?>"#).unwrap();
        writeln!(
            &mut svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{:.0}" height="{:.0}" viewBox="0 0 {:.0} {:.0}">"#,
            width, height, width, height
        )
        .unwrap();

        // Background
        writeln!(
            &mut svg,
            r#"  <rect width="100%" height="100%" fill="{}"/>"#,
            self.config.colors.background
        )
        .unwrap();

        // Title
        if let Some(ref title) = self.title {
            writeln!(
                &mut svg,
                r##"  <text x="{:.0}" y="22" font-family="sans-serif" font-size="16" font-weight="bold" text-anchor="middle" fill="#333">{}</text>"##,
                width / 2.0,
                title
            )
            .unwrap();
        }

        // Field group with translation
        writeln!(
            &mut svg,
            r#"  <g transform="translate({:.0}, {:.0})">"#,
            padding,
            padding + title_height
        )
        .unwrap();

        self.render_cells(&mut svg);
        self.render_hazards(&mut svg);
        self.render_route(&mut svg);
        self.render_endpoints(&mut svg);

        writeln!(&mut svg, "  </g>").unwrap();

        // SVG footer
        writeln!(&mut svg, "</svg>").unwrap();

        svg
    }

    /// Save the rendering to a file.
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        std::fs::write(path, self.render())
    }

    /// Render cost-shaded field cells
    fn render_cells(&self, svg: &mut String) {
        let cell = self.config.cell_size;

        writeln!(svg, r#"    <g id="field">"#).unwrap();
        writeln!(
            svg,
            r#"      <rect width="{:.0}" height="{:.0}" fill="{}"/>"#,
            self.grid.width() as f32 * cell,
            self.grid.height() as f32 * cell,
            self.config.colors.field
        )
        .unwrap();

        // Shade cells by cost relative to the grid maximum; base-cost
        // cells stay unshaded.
        let span = self.grid.max_cost() - BASE_COST;
        if span > 0.0 {
            for y in 0..self.grid.height() as i32 {
                for x in 0..self.grid.width() as i32 {
                    let cost = self.grid.cost(GridCoord::new(x, y));
                    if cost <= BASE_COST {
                        continue;
                    }
                    let opacity = (((cost - BASE_COST) / span) * 0.8).min(0.8);
                    writeln!(
                        svg,
                        r#"      <rect x="{:.0}" y="{:.0}" width="{:.0}" height="{:.0}" fill="{}" fill-opacity="{:.2}"/>"#,
                        x as f32 * cell,
                        y as f32 * cell,
                        cell,
                        cell,
                        self.config.colors.cost_shade,
                        opacity
                    )
                    .unwrap();
                }
            }
        }

        writeln!(svg, "    </g>").unwrap();
    }

    /// Render hazard influence circles colored by severity band
    fn render_hazards(&self, svg: &mut String) {
        if self.hazards.is_empty() {
            return;
        }

        let cell = self.config.cell_size;
        writeln!(svg, r#"    <g id="hazards">"#).unwrap();

        for hazard in &self.hazards {
            let color = hazard.severity_level().color();
            let (cx, cy) = self.cell_center(hazard.center());
            let radius = (hazard.radius as f32 + 0.5) * cell;

            writeln!(
                svg,
                r#"      <circle cx="{:.1}" cy="{:.1}" r="{:.1}" fill="none" stroke="{}" stroke-width="2" stroke-dasharray="4 2"/>"#,
                cx, cy, radius, color
            )
            .unwrap();
            writeln!(
                svg,
                r#"      <circle cx="{:.1}" cy="{:.1}" r="{:.1}" fill="{}"/>"#,
                cx,
                cy,
                cell * 0.25,
                color
            )
            .unwrap();
        }

        writeln!(svg, "    </g>").unwrap();
    }

    /// Render the route polyline
    fn render_route(&self, svg: &mut String) {
        if self.route.len() < 2 {
            return;
        }

        let mut points = String::new();
        for coord in &self.route {
            let (x, y) = self.cell_center(*coord);
            write!(&mut points, "{:.1},{:.1} ", x, y).unwrap();
        }

        writeln!(
            svg,
            r#"    <polyline points="{}" fill="none" stroke="{}" stroke-width="{:.1}" stroke-linejoin="round" stroke-linecap="round"/>"#,
            points.trim_end(),
            self.config.colors.route,
            self.config.route_width
        )
        .unwrap();
    }

    /// Render start and goal markers
    fn render_endpoints(&self, svg: &mut String) {
        let Some(start) = self.route.first() else {
            return;
        };
        let Some(goal) = self.route.last() else {
            return;
        };

        let (sx, sy) = self.cell_center(*start);
        let (gx, gy) = self.cell_center(*goal);
        let r = self.config.marker_radius;

        writeln!(
            svg,
            r#"    <circle cx="{:.1}" cy="{:.1}" r="{:.1}" fill="{}"/>"#,
            sx, sy, r, self.config.colors.start
        )
        .unwrap();
        writeln!(
            svg,
            r#"    <circle cx="{:.1}" cy="{:.1}" r="{:.1}" fill="{}"/>"#,
            gx, gy, r, self.config.colors.goal
        )
        .unwrap();
    }

    /// Pixel center of a cell
    fn cell_center(&self, coord: GridCoord) -> (f32, f32) {
        let cell = self.config.cell_size;
        (
            (coord.x as f32 + 0.5) * cell,
            (coord.y as f32 + 0.5) * cell,
        )
    }
}
