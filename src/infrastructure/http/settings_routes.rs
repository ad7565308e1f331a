//! Settings API routes
//!
//! Thin adapter over the per-category settings gateways. Domain outcomes come
//! back as `200` with a body or `204` with none; only storage failures map to
//! an error status.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, put},
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;

use crate::application::dto::{GatewayResponse, SettingDto};
use crate::application::ports::inbound::ManageSettingsUseCase;
use crate::application::ports::outbound::SettingsError;
use crate::domain::value_objects::SettingCategory;
use crate::infrastructure::state::AppState;

pub fn settings_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/settings/{category}", get(list_settings))
        .route("/api/settings/{category}", put(update_setting))
        .route("/api/settings/{category}/bulk", put(update_settings))
        .route("/api/settings/{category}/{key}", get(get_setting))
}

impl<T: Serialize> IntoResponse for GatewayResponse<T> {
    fn into_response(self) -> Response {
        match self {
            GatewayResponse::Ok(body) => Json(body).into_response(),
            GatewayResponse::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

fn internal_error(e: SettingsError) -> (StatusCode, String) {
    tracing::error!("Settings storage error: {}", e);
    (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
}

async fn list_settings(
    State(state): State<Arc<AppState>>,
    Path(category): Path<SettingCategory>,
) -> Result<GatewayResponse<Vec<SettingDto>>, (StatusCode, String)> {
    state
        .settings
        .for_category(category)
        .get_all()
        .await
        .map_err(internal_error)
}

async fn get_setting(
    State(state): State<Arc<AppState>>,
    Path((category, key)): Path<(SettingCategory, String)>,
) -> Result<GatewayResponse<SettingDto>, (StatusCode, String)> {
    state
        .settings
        .for_category(category)
        .get(&key)
        .await
        .map_err(internal_error)
}

async fn update_setting(
    State(state): State<Arc<AppState>>,
    Path(category): Path<SettingCategory>,
    Json(dto): Json<SettingDto>,
) -> Result<GatewayResponse<bool>, (StatusCode, String)> {
    state
        .settings
        .for_category(category)
        .update(dto)
        .await
        .map_err(internal_error)
}

async fn update_settings(
    State(state): State<Arc<AppState>>,
    Path(category): Path<SettingCategory>,
    Json(dtos): Json<Vec<SettingDto>>,
) -> GatewayResponse<bool> {
    state.settings.for_category(category).update_all(dtos).await
}
