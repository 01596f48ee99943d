use crate::{AppState, error::AppError};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use core_types::Trade;
use game_sync::{SyncRequest, sync_user};
use ledger::NewTrade;
use rankings::{ClubRanking, UserRanking, club_rankings, user_rankings};
use serde::Serialize;
use serde_json::{Value, json};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct TradeList {
    pub trades: Vec<Trade>,
}

#[derive(Debug, Serialize)]
pub struct CreatedTrade {
    pub trade: Trade,
}

#[derive(Debug, Serialize)]
pub struct Rankings<T> {
    pub rankings: Vec<T>,
}

/// # GET /
pub async fn health_check() -> Json<Value> {
    Json(json!({ "ok": true, "service": "sword-game-backend" }))
}

/// # GET /api/leverage-trades
/// Fetches all trades, newest first.
pub async fn get_trades(
    State(state): State<Arc<AppState>>,
) -> Result<Json<TradeList>, AppError> {
    let trades = state.ledger.list().await?;
    Ok(Json(TradeList { trades }))
}

/// # POST /api/leverage-trades
/// Records a new trade and returns it with its generated id and timestamp.
pub async fn create_trade(
    State(state): State<Arc<AppState>>,
    Json(new_trade): Json<NewTrade>,
) -> Result<(StatusCode, Json<CreatedTrade>), AppError> {
    let trade = state.ledger.create(new_trade).await?;
    Ok((StatusCode::CREATED, Json(CreatedTrade { trade })))
}

/// # DELETE /api/leverage-trades/:id
pub async fn delete_trade(
    Path(id): Path<Uuid>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<Value>, AppError> {
    state.ledger.delete(id).await?;
    Ok(Json(json!({ "ok": true })))
}

/// # GET /api/rankings/clubs
/// Club leaderboard: summed effective assets per club, highest first.
pub async fn get_club_rankings(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Rankings<ClubRanking>>, AppError> {
    let users = state.store.list_users().await?;
    Ok(Json(Rankings {
        rankings: club_rankings(&users),
    }))
}

/// # GET /api/rankings/users
pub async fn get_user_rankings(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Rankings<UserRanking>>, AppError> {
    let users = state.store.list_users().await?;
    Ok(Json(Rankings {
        rankings: user_rankings(&users),
    }))
}

/// # POST /api/game/sync
/// Upserts the reporting user's progress record.
pub async fn sync_game(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SyncRequest>,
) -> Result<Json<Value>, AppError> {
    sync_user(state.store.as_ref(), request).await?;
    Ok(Json(json!({ "ok": true })))
}
