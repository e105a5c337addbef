//! Axum route handlers for roadmap generation.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::matching::scorer::partition_skills;
use crate::roadmap::generator::{generate_roadmap, Roadmap, RoadmapProfile};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RoadmapRequest {
    pub career_id: Uuid,
    pub profile: RoadmapProfile,
}

#[derive(Debug, Serialize)]
pub struct RoadmapResponse {
    pub roadmap: Roadmap,
    /// The skill gap the roadmap was built from.
    pub missing_skills: Vec<String>,
}

/// POST /api/v1/roadmaps
///
/// Fetches the target career, derives the user's skill gap, and generates
/// the phased roadmap.
pub async fn handle_generate_roadmap(
    State(state): State<AppState>,
    Json(request): Json<RoadmapRequest>,
) -> Result<Json<RoadmapResponse>, AppError> {
    let career = state
        .careers
        .get(request.career_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Career {} not found", request.career_id)))?;

    let (_, missing_skills) = partition_skills(&request.profile.skills, &career.required_skills);

    let roadmap = generate_roadmap(
        &request.profile,
        &career,
        &missing_skills,
        state.clock.as_ref(),
    );

    Ok(Json(RoadmapResponse {
        roadmap,
        missing_skills,
    }))
}
