pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis_handlers;
use crate::opportunities::handlers as opportunity_handlers;
use crate::profiles::handlers as profile_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Analysis API
        .route(
            "/api/v1/analysis/profile",
            post(analysis_handlers::handle_analyze_profile),
        )
        .route(
            "/api/v1/analysis/cv",
            post(analysis_handlers::handle_analyze_cv),
        )
        // Opportunities API
        .route(
            "/api/v1/opportunities",
            get(opportunity_handlers::handle_list_opportunities),
        )
        // Profile API
        .route(
            "/api/v1/profile/:user_id",
            get(profile_handlers::handle_get_profile).put(profile_handlers::handle_put_profile),
        )
        .with_state(state)
}
