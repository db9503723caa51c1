use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use cupcakes_service::{CupcakePayload, Mutation, Query, ServiceError};
use entity::cupcake;
use serde_json::{json, Value};

use crate::{error::ApiError, AppState};

pub async fn list_cupcakes(
    State(state): State<AppState>,
) -> Result<Json<Vec<cupcake::Model>>, ApiError> {
    let cupcakes = Query::list_cupcakes(&state.conn).await?;
    Ok(Json(cupcakes))
}

pub async fn create_cupcake(
    State(state): State<AppState>,
    Json(payload): Json<CupcakePayload>,
) -> Result<(StatusCode, Json<cupcake::Model>), ApiError> {
    let cupcake = Mutation::create_cupcake(&state.conn, payload).await?;
    Ok((StatusCode::CREATED, Json(cupcake)))
}

pub async fn show_cupcake(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<cupcake::Model>, ApiError> {
    let cupcake = Query::find_cupcake_by_id(&state.conn, id)
        .await?
        .ok_or(ServiceError::NotFound)?;
    Ok(Json(cupcake))
}

pub async fn update_cupcake(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<CupcakePayload>,
) -> Result<Json<Value>, ApiError> {
    Mutation::update_cupcake(&state.conn, id, payload).await?;
    Ok(Json(json!({ "message": "Updated successfully" })))
}

pub async fn delete_cupcake(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Value>, ApiError> {
    Mutation::delete_cupcake(&state.conn, id).await?;
    Ok(Json(json!({ "message": "Deleted successfully" })))
}
