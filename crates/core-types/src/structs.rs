use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A single simulated leverage trade made by a player.
///
/// Trades are append-only: they are created once via the ledger, never
/// mutated, and removed only by an explicit delete. The wire format uses
/// camelCase field names (`createdAt`), matching the JSON API contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Trade {
    /// Unique identifier, generated server-side at creation.
    pub id: Uuid,
    /// Free-text identifier of the traded instrument.
    pub company: String,
    /// Integer leverage multiplier.
    pub leverage: i64,
    /// Conventionally "leverage" or "inverse"; any string is stored as-is.
    #[serde(rename = "type")]
    pub trade_type: String,
    /// Unit count.
    pub quantity: i64,
    /// Identifier of the owning user. No foreign-key enforcement.
    #[sqlx(rename = "user_id")]
    pub user: String,
    /// Milliseconds since the Unix epoch, stamped once at creation.
    pub created_at: i64,
}

/// Per-user game progress, one mutable record per id.
///
/// The id is supplied by the client and is the primary key; every game-sync
/// call fully overwrites the remaining fields. Integer fields default to
/// zero when absent so documents written by older processes still load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    /// Current progress stage.
    #[serde(default)]
    pub stage: i64,
    /// Highest stage ever reached.
    #[serde(default)]
    pub max_stage: i64,
    #[serde(default)]
    pub attempts: i64,
    /// Club affiliation; users without one rank under the "NoClub" sentinel.
    #[serde(default)]
    pub club_name: Option<String>,
    /// Asset total reported by the game; falls back to `max_stage` when absent.
    #[serde(default)]
    pub total_assets: Option<i64>,
}

impl User {
    /// The effective asset value used by every ranking: `total_assets` if
    /// present, else `max_stage` (which itself defaults to 0).
    pub fn effective_assets(&self) -> i64 {
        self.total_assets.unwrap_or(self.max_stage)
    }
}
