use axum::{extract::State, response::IntoResponse, Json};

use crate::server::{service::info::InfoService, state::AppState};

/// Tag for grouping info endpoints in OpenAPI documentation
pub static INFO_TAG: &str = "info";

/// Get the port the server listens on.
#[utoipa::path(
    get,
    path = "/info/port",
    tag = INFO_TAG,
    responses(
        (status = 200, description = "Configured server port", body = u16)
    ),
)]
pub async fn get_port(State(state): State<AppState>) -> impl IntoResponse {
    Json(InfoService::new(state.server_port).get_port())
}
