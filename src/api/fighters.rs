use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use std::sync::Arc;

use super::validation::parse_fighter_id;
use super::{ApiError, AppState, FighterDto, MessageResponse};
use crate::models::fighter::{FighterPatch, NewFighter};

pub const WELCOME_MESSAGE: &str = "Welcome to the Street Fighter Database!";

pub async fn home() -> &'static str {
    WELCOME_MESSAGE
}

pub async fn list_fighters(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<FighterDto>>, ApiError> {
    let fighters = state.fighters.list().await?;
    Ok(Json(fighters.into_iter().map(FighterDto::from).collect()))
}

pub async fn get_fighter(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<FighterDto>, ApiError> {
    let id = parse_fighter_id(&id)?;
    let fighter = state.fighters.get(id).await?;
    Ok(Json(FighterDto::from(fighter)))
}

pub async fn create_fighters(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Vec<NewFighter>>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let Json(fighters) = payload?;
    state.fighters.create_many(fighters).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Fighters created successfully")),
    ))
}

pub async fn update_fighter(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    payload: Result<Json<FighterPatch>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = parse_fighter_id(&id)?;

    // An unknown id wins over a malformed body.
    let patch = match payload {
        Ok(Json(patch)) => patch,
        Err(rejection) => {
            state.fighters.get(id).await?;
            return Err(rejection.into());
        }
    };

    state.fighters.update(id, patch).await?;
    Ok(Json(MessageResponse::new("Fighter updated successfully")))
}

pub async fn delete_fighter(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = parse_fighter_id(&id)?;
    state.fighters.delete(id).await?;
    Ok(Json(MessageResponse::new("Fighter deleted successfully")))
}
