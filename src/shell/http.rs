use axum::{
    Json, Router,
    response::Redirect,
    routing::{delete, get, post},
};
use serde_json::json;
use tower_http::services::ServeDir;

use crate::modules::activities::use_cases::list_activities::inbound::http as list_http;
use crate::modules::activities::use_cases::signup_for_activity::inbound::http as signup_http;
use crate::modules::activities::use_cases::unregister_from_activity::inbound::http as unregister_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::to("/static/index.html") }))
        .route("/health", get(|| async { Json(json!({ "status": "ok" })) }))
        .route("/activities", get(list_http::handle))
        .route(
            "/activities/{activity_name}/signup",
            post(signup_http::handle),
        )
        .route(
            "/activities/{activity_name}/participants",
            delete(unregister_http::handle),
        )
        .nest_service("/static", ServeDir::new("static"))
        .with_state(state)
}
