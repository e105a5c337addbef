//! Axum route handlers for career recommendations.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::matching::scorer::{rank_matches, MatchProfile, MatchResult};
use crate::state::AppState;

/// How many ranked careers a recommendation request returns.
const TOP_N: usize = 3;

#[derive(Debug, Deserialize)]
pub struct RecommendationRequest {
    pub profile: MatchProfile,
    /// User-declared "no prior professional skills" mode; shifts scoring
    /// weight from skills to interests.
    #[serde(default)]
    pub starting_fresh: bool,
}

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub recommendations: Vec<MatchResult>,
    pub starting_fresh: bool,
}

/// POST /api/v1/recommendations
///
/// Scores the full catalog against the submitted profile and returns the
/// top matches with per-factor breakdowns.
pub async fn handle_recommendations(
    State(state): State<AppState>,
    Json(request): Json<RecommendationRequest>,
) -> Result<Json<RecommendationResponse>, AppError> {
    let catalog = state.careers.get_all().await?;

    let recommendations = rank_matches(
        &request.profile,
        &catalog,
        request.starting_fresh,
        TOP_N,
    );

    Ok(Json(RecommendationResponse {
        recommendations,
        starting_fresh: request.starting_fresh,
    }))
}
