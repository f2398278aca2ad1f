use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{error, info, instrument};

use crate::state::AppState;

use super::dto::{AddVegetableRequest, AddVegetableResponse};
use super::repo::{self, Vegetable};

pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/vegetables", get(list_vegetables))
        .route("/addvegetable", post(add_vegetable))
}

#[instrument(skip(state))]
pub async fn list_vegetables(
    State(state): State<AppState>,
) -> Result<Json<Vec<Vegetable>>, (StatusCode, Json<serde_json::Value>)> {
    let vegetables = repo::list_all(&state.db).await.map_err(internal)?;
    info!(count = vegetables.len(), "vegetables fetched");
    Ok(Json(vegetables))
}

#[instrument(skip(state, payload))]
pub async fn add_vegetable(
    State(state): State<AppState>,
    Json(payload): Json<AddVegetableRequest>,
) -> Result<(StatusCode, Json<AddVegetableResponse>), (StatusCode, Json<serde_json::Value>)> {
    let (name, image) = match (payload.name.as_deref(), payload.image.as_deref()) {
        (Some(n), Some(i)) if !n.is_empty() && !i.is_empty() => (n, i),
        _ => {
            return Err((
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({ "message": "Name and image are required" })),
            ))
        }
    };

    let vegetable = repo::insert(&state.db, name, image).await.map_err(internal)?;
    info!(id = %vegetable.id, name, "vegetable added");
    Ok((
        StatusCode::CREATED,
        Json(AddVegetableResponse {
            message: "Vegetable added successfully".to_string(),
            vegetable,
        }),
    ))
}

fn internal(e: anyhow::Error) -> (StatusCode, Json<serde_json::Value>) {
    error!(error = %e, "catalog store error");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(serde_json::json!({ "message": "Server error", "error": e.to_string() })),
    )
}
