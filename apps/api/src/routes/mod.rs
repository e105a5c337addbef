pub mod health;

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::catalog::handlers as catalog;
use crate::matching::handlers as matching;
use crate::mentor::handlers as mentor;
use crate::plans::handlers as plans;
use crate::roadmap::handlers as roadmap;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Career catalog
        .route(
            "/api/v1/careers",
            get(catalog::handle_list_careers).post(catalog::handle_create_career),
        )
        .route(
            "/api/v1/careers/:id",
            get(catalog::handle_get_career)
                .put(catalog::handle_update_career)
                .delete(catalog::handle_delete_career),
        )
        // Matching & roadmaps
        .route("/api/v1/recommendations", post(matching::handle_recommendations))
        .route("/api/v1/roadmaps", post(roadmap::handle_generate_roadmap))
        // Saved plans
        .route(
            "/api/v1/plans",
            post(plans::handle_create_plan).get(plans::handle_list_plans),
        )
        .route(
            "/api/v1/plans/:id",
            get(plans::handle_get_plan).delete(plans::handle_delete_plan),
        )
        .route("/api/v1/plans/:id/progress", patch(plans::handle_update_progress))
        // AI mentor
        .route("/api/v1/mentor/chat", post(mentor::handle_chat))
        .route("/api/v1/mentor/startup-ideas", post(mentor::handle_startup_ideas))
        .route("/api/v1/mentor/skill-analysis", post(mentor::handle_skill_analysis))
        .route("/api/v1/resumes/analyze", post(mentor::handle_analyze_resume))
        .with_state(state)
}
