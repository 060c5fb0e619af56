pub mod health;

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::credits::handlers as credit_handlers;
use crate::generation::handlers as generation_handlers;
use crate::sources::handlers as source_handlers;
use crate::state::AppState;
use crate::voices::handlers as voice_handlers;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Platform catalog
        .route(
            "/api/v1/platforms",
            get(generation_handlers::handle_list_platforms),
        )
        // Content sources
        .route(
            "/api/v1/sources",
            get(source_handlers::handle_list_sources).post(source_handlers::handle_create_source),
        )
        .route(
            "/api/v1/sources/upload",
            post(source_handlers::handle_upload_source),
        )
        .route(
            "/api/v1/sources/import",
            post(source_handlers::handle_import_url),
        )
        .route(
            "/api/v1/sources/:id",
            get(source_handlers::handle_get_source)
                .patch(source_handlers::handle_update_source)
                .delete(source_handlers::handle_delete_source),
        )
        // Generation
        .route("/api/v1/generate", post(generation_handlers::handle_generate))
        .route(
            "/api/v1/generated",
            get(generation_handlers::handle_list_generated),
        )
        .route(
            "/api/v1/generated/:id",
            patch(generation_handlers::handle_update_generated)
                .delete(generation_handlers::handle_delete_generated),
        )
        .route(
            "/api/v1/generated/:id/regenerate",
            post(generation_handlers::handle_regenerate),
        )
        // Brand voices
        .route(
            "/api/v1/voices",
            get(voice_handlers::handle_list_voices).post(voice_handlers::handle_create_voice),
        )
        .route(
            "/api/v1/voices/default",
            get(voice_handlers::handle_get_default_voice),
        )
        .route(
            "/api/v1/voices/:id",
            get(voice_handlers::handle_get_voice)
                .patch(voice_handlers::handle_update_voice)
                .delete(voice_handlers::handle_delete_voice),
        )
        // Credits
        .route("/api/v1/credits", get(credit_handlers::handle_get_credits))
        .route(
            "/api/v1/credits/history",
            get(credit_handlers::handle_usage_history),
        )
        .with_state(state)
}
