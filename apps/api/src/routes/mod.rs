pub mod health;

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::state::AppState;
use crate::{exploration, firms, ikigai, journey, onboarding};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Profile + onboarding wizard (Introspection)
        .route(
            "/api/v1/profile",
            get(onboarding::handlers::handle_get_profile)
                .put(onboarding::handlers::handle_put_profile),
        )
        .route(
            "/api/v1/onboarding",
            get(onboarding::handlers::handle_get_onboarding),
        )
        .route(
            "/api/v1/onboarding/advance",
            post(onboarding::handlers::handle_advance),
        )
        .route(
            "/api/v1/onboarding/back",
            post(onboarding::handlers::handle_back),
        )
        // Ikigai wizard + insights (Introspection)
        .route(
            "/api/v1/ikigai",
            get(ikigai::handlers::handle_get_ikigai).put(ikigai::handlers::handle_put_ikigai),
        )
        .route(
            "/api/v1/ikigai/insights",
            post(ikigai::handlers::handle_insights),
        )
        // Journey overview
        .route("/api/v1/journey", get(journey::handlers::handle_journey))
        // Industry research (Exploration)
        .route(
            "/api/v1/research",
            get(exploration::handlers::handle_get_research)
                .put(exploration::handlers::handle_put_research),
        )
        // Projects, plans, building in public (Exploration / Reflection)
        .route(
            "/api/v1/projects",
            get(exploration::handlers::handle_list_projects),
        )
        .route(
            "/api/v1/projects/generate",
            post(exploration::handlers::handle_generate_projects),
        )
        .route(
            "/api/v1/projects/:id/select",
            post(exploration::handlers::handle_select_project),
        )
        .route(
            "/api/v1/projects/:id/learning-plan",
            post(exploration::handlers::handle_learning_plan),
        )
        .route(
            "/api/v1/projects/:id/building-plan",
            post(exploration::handlers::handle_building_plan),
        )
        .route(
            "/api/v1/building/post",
            post(exploration::handlers::handle_social_post),
        )
        .route(
            "/api/v1/exploration/progress",
            get(exploration::handlers::handle_exploration_progress),
        )
        // Target firms + alerts (Action)
        .route(
            "/api/v1/firms",
            get(firms::handlers::handle_list_firms).post(firms::handlers::handle_create_firm),
        )
        .route(
            "/api/v1/firms/:id/alerts",
            patch(firms::handlers::handle_toggle_alerts),
        )
        .route(
            "/api/v1/alerts",
            get(firms::handlers::handle_list_alerts).post(firms::handlers::handle_ingest_alert),
        )
        .route(
            "/api/v1/alerts/:id/read",
            patch(firms::handlers::handle_mark_read),
        )
        .with_state(state)
}
