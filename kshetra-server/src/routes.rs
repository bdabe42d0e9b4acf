//! HTTP routes for the planning service.
//!
//! `POST /path/generate` is the planning endpoint; `GET /` reports
//! liveness. The absence of a route is a valid planning outcome and is
//! returned with HTTP 200 and an empty `path`; only malformed bodies and
//! degenerate dimensions produce error responses.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use kshetra_plan::{GridCoord, Hazard, RouteQuery};

use crate::error::ApiError;
use crate::state::AppState;

/// Build the service router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/path/generate", post(generate_path))
        .with_state(state)
}

async fn home() -> Json<Value> {
    Json(json!({ "message": "KshetraPath planning service is running" }))
}

/// Request body for `POST /path/generate`.
#[derive(Debug, Deserialize)]
struct PathRequest {
    #[serde(default = "default_width")]
    width: u32,

    #[serde(default = "default_height")]
    height: u32,

    /// Start cell; defaults to the top-left corner
    start: Option<[i32; 2]>,

    /// Goal cell; defaults to the bottom-right corner
    goal: Option<[i32; 2]>,

    /// Known hazards; omitted or empty selects the deterministic demo field
    #[serde(default)]
    mines: Vec<Hazard>,

    /// Per-request obstacle threshold override
    obstacle_threshold: Option<f32>,
}

fn default_width() -> u32 {
    40
}
fn default_height() -> u32 {
    30
}

/// Response body for `POST /path/generate`.
#[derive(Debug, Serialize)]
struct PathResponse {
    grid_size: [u32; 2],
    danger_zones: Vec<Hazard>,
    path: Vec<[i32; 2]>,
    /// Reserved for a downsampled cost surface; always null today.
    grid_cost_sample: Option<Vec<Vec<f32>>>,
}

async fn generate_path(
    State(state): State<AppState>,
    payload: Result<Json<PathRequest>, JsonRejection>,
) -> Result<Json<PathResponse>, ApiError> {
    let Json(request) = payload?;

    let start = request.start.unwrap_or([0, 0]);
    let goal = request
        .goal
        .unwrap_or([request.width as i32 - 1, request.height as i32 - 1]);

    let query = RouteQuery {
        width: request.width as usize,
        height: request.height as usize,
        start: GridCoord::new(start[0], start[1]),
        goal: GridCoord::new(goal[0], goal[1]),
        hazards: request.mines,
        obstacle_threshold: request.obstacle_threshold,
    };

    let plan = state.planner.plan_route(&query)?;

    Ok(Json(PathResponse {
        grid_size: [request.width, request.height],
        danger_zones: plan.hazards,
        path: plan.path.iter().map(|cell| [cell.x, cell.y]).collect(),
        grid_cost_sample: None,
    }))
}
