use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::json;

use crate::modules::activities::core::errors::RegistryError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct SignupParams {
    pub email: String,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    params: Result<Query<SignupParams>, QueryRejection>,
) -> impl IntoResponse {
    let Query(params) = match params {
        Ok(p) => p,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "detail": "email query parameter is required" })),
            )
                .into_response();
        }
    };
    if params.email.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "detail": "email must not be empty" })),
        )
            .into_response();
    }

    match state.registry.sign_up(&activity_name, &params.email).await {
        Ok(confirmation) => Json(json!({
            "message": format!(
                "Signed up {} for {}",
                confirmation.participant, confirmation.activity
            )
        }))
        .into_response(),
        Err(error) => {
            let status = match error {
                RegistryError::NotFound => StatusCode::NOT_FOUND,
                RegistryError::AlreadyRegistered | RegistryError::CapacityExceeded => {
                    StatusCode::BAD_REQUEST
                }
            };
            (status, Json(json!({ "detail": error.to_string() }))).into_response()
        }
    }
}
