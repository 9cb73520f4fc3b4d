use axum::{
    extract::{Path, State},
    response::Json,
    routing::{delete, get, patch},
    Router,
};
use tracing::debug;

use crate::{
    dto::{ExtensionListResponse, ExtensionResponse, RemoveExtensionResponse},
    errors::ApiError,
    state::AppState,
    utils::parse_path_id,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/extensions", get(get_extensions))
        .route("/extensions/{id}/toggle", patch(toggle_extension))
        .route("/extensions/{id}", delete(remove_extension))
}

async fn get_extensions(
    State(state): State<AppState>,
) -> Result<Json<ExtensionListResponse>, ApiError> {
    let extensions = state.get_extensions.execute().await?;
    debug!(count = extensions.len(), "Extensions listed");
    Ok(Json(ExtensionListResponse {
        extensions: extensions
            .into_iter()
            .map(ExtensionResponse::from_extension)
            .collect(),
    }))
}

async fn toggle_extension(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<ExtensionResponse>, ApiError> {
    let id = parse_path_id(&raw_id)?;
    let updated = state.toggle_extension.execute(id).await?;
    Ok(Json(ExtensionResponse::from_extension(updated)))
}

async fn remove_extension(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<RemoveExtensionResponse>, ApiError> {
    let id = parse_path_id(&raw_id)?;
    let removed = state.remove_extension.execute(id).await?;
    Ok(Json(RemoveExtensionResponse {
        message: "Extension removed successfully".to_string(),
        id: removed,
    }))
}
