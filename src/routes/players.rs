use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::Json,
};
use serde::Deserialize;
use serde_json::Value;

use crate::error::ApiError;
use crate::shape;
use crate::state::AppState;

// Query parameters for the player endpoint
#[derive(Deserialize)]
pub struct PlayerQuery {
    #[serde(default)]
    id: Option<String>,
}

// GET /api/player?id=26169 - fetch, cache and shape a single player profile
pub async fn get_player(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PlayerQuery>,
) -> Result<Json<Value>, ApiError> {
    let id = params
        .id
        .filter(|id| !id.is_empty())
        .ok_or(ApiError::MissingPlayerId)?;

    let payload = state.upstream.fetch_player(&id).await.map_err(|err| {
        tracing::error!("player fetch failed for id={}: {}", id, err);
        ApiError::Upstream(err)
    })?;

    Ok(Json(shape::shape(state.mode, &payload, &state.image_base_url)))
}
