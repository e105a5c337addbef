//! Axum route handlers for the career catalog.
//!
//! The list/get endpoints are public; create/update/delete are the
//! administrator CRUD surface.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::repository::NewCareerPath;
use crate::errors::AppError;
use crate::models::career::CareerPath;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CareerListQuery {
    /// Optional case-insensitive category filter.
    pub category: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CareerListResponse {
    pub careers: Vec<CareerPath>,
    pub total: usize,
}

/// GET /api/v1/careers
pub async fn handle_list_careers(
    State(state): State<AppState>,
    Query(params): Query<CareerListQuery>,
) -> Result<Json<CareerListResponse>, AppError> {
    let mut careers = state.careers.get_all().await?;

    if let Some(category) = &params.category {
        let category = category.to_lowercase();
        careers.retain(|c| c.category.to_lowercase() == category);
    }

    let total = careers.len();
    Ok(Json(CareerListResponse { careers, total }))
}

/// GET /api/v1/careers/:id
pub async fn handle_get_career(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CareerPath>, AppError> {
    let career = state
        .careers
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Career {id} not found")))?;
    Ok(Json(career))
}

/// POST /api/v1/careers
pub async fn handle_create_career(
    State(state): State<AppState>,
    Json(request): Json<NewCareerPath>,
) -> Result<Json<CareerPath>, AppError> {
    validate(&request)?;
    let career = state.careers.create(request).await?;
    Ok(Json(career))
}

/// PUT /api/v1/careers/:id
pub async fn handle_update_career(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<NewCareerPath>,
) -> Result<Json<CareerPath>, AppError> {
    validate(&request)?;
    let career = state
        .careers
        .update(id, request)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Career {id} not found")))?;
    Ok(Json(career))
}

/// DELETE /api/v1/careers/:id
pub async fn handle_delete_career(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    if !state.careers.delete(id).await? {
        return Err(AppError::NotFound(format!("Career {id} not found")));
    }
    Ok(Json(serde_json::json!({ "deleted": id })))
}

fn validate(request: &NewCareerPath) -> Result<(), AppError> {
    if request.title.trim().is_empty() {
        return Err(AppError::Validation("title cannot be empty".to_string()));
    }
    if request.category.trim().is_empty() {
        return Err(AppError::Validation("category cannot be empty".to_string()));
    }
    Ok(())
}
