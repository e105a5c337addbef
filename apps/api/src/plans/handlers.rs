//! Axum route handlers for saved career plans.
//!
//! A plan is a generated roadmap the user chose to keep, stored as a JSONB
//! document, plus their progress through its milestones.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::plan::PlanRow;
use crate::roadmap::generator::Roadmap;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CreatePlanRequest {
    pub user_id: Uuid,
    /// Defaults to "<career> plan" when omitted.
    pub title: Option<String>,
    pub roadmap: Roadmap,
}

#[derive(Debug, Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct ProgressUpdateRequest {
    /// Milestone `order` values the user has completed.
    pub completed_milestones: Vec<i32>,
}

#[derive(Debug, Serialize)]
pub struct PlanResponse {
    #[serde(flatten)]
    pub plan: PlanRow,
    pub progress_percent: u32,
}

impl From<PlanRow> for PlanResponse {
    fn from(plan: PlanRow) -> Self {
        let progress_percent = plan.progress_percent();
        Self {
            plan,
            progress_percent,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PlanListResponse {
    pub plans: Vec<PlanResponse>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/plans
pub async fn handle_create_plan(
    State(state): State<AppState>,
    Json(request): Json<CreatePlanRequest>,
) -> Result<Json<PlanResponse>, AppError> {
    let title = request
        .title
        .filter(|t| !t.trim().is_empty())
        .unwrap_or_else(|| format!("{} plan", request.roadmap.career_path));

    let roadmap = serde_json::to_value(&request.roadmap)
        .map_err(|e| AppError::Validation(format!("invalid roadmap document: {e}")))?;

    let plan = sqlx::query_as::<_, PlanRow>(
        r#"
        INSERT INTO plans (id, user_id, title, career_path, roadmap)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(request.user_id)
    .bind(&title)
    .bind(&request.roadmap.career_path)
    .bind(roadmap)
    .fetch_one(&state.db)
    .await?;

    Ok(Json(plan.into()))
}

/// GET /api/v1/plans
pub async fn handle_list_plans(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<PlanListResponse>, AppError> {
    let plans = sqlx::query_as::<_, PlanRow>(
        "SELECT * FROM plans WHERE user_id = $1 ORDER BY created_at DESC",
    )
    .bind(params.user_id)
    .fetch_all(&state.db)
    .await?;

    Ok(Json(PlanListResponse {
        plans: plans.into_iter().map(PlanResponse::from).collect(),
    }))
}

/// GET /api/v1/plans/:id
pub async fn handle_get_plan(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PlanResponse>, AppError> {
    let plan = fetch_plan(&state, id).await?;
    Ok(Json(plan.into()))
}

/// PATCH /api/v1/plans/:id/progress
pub async fn handle_update_progress(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<ProgressUpdateRequest>,
) -> Result<Json<PlanResponse>, AppError> {
    // Duplicate completions would inflate the percentage
    let mut completed = request.completed_milestones;
    completed.sort_unstable();
    completed.dedup();

    let plan = sqlx::query_as::<_, PlanRow>(
        r#"
        UPDATE plans SET completed_milestones = $2, updated_at = now()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(&completed)
    .fetch_optional(&state.db)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Plan {id} not found")))?;

    Ok(Json(plan.into()))
}

/// DELETE /api/v1/plans/:id
pub async fn handle_delete_plan(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let result = sqlx::query("DELETE FROM plans WHERE id = $1")
        .bind(id)
        .execute(&state.db)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(format!("Plan {id} not found")));
    }
    Ok(Json(serde_json::json!({ "deleted": id })))
}

async fn fetch_plan(state: &AppState, id: Uuid) -> Result<PlanRow, AppError> {
    sqlx::query_as::<_, PlanRow>("SELECT * FROM plans WHERE id = $1")
        .bind(id)
        .fetch_optional(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Plan {id} not found")))
}
