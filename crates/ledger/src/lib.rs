//! # Trade Ledger
//!
//! Append-only creation, newest-first listing, and deletion of trade
//! records. The ledger owns id generation and creation timestamps; the
//! injected [`RecordStore`] owns durability.

use chrono::Utc;
use core_types::Trade;
use serde::Deserialize;
use std::sync::Arc;
use store::RecordStore;
use uuid::Uuid;

pub mod error;

pub use error::LedgerError;

/// The client-supplied part of a new trade; id and timestamp are generated
/// here. Field values are stored as-is (no validation beyond type coercion
/// at the HTTP boundary).
#[derive(Debug, Clone, Deserialize)]
pub struct NewTrade {
    pub company: String,
    pub leverage: i64,
    #[serde(rename = "type")]
    pub trade_type: String,
    pub quantity: i64,
    pub user: String,
}

/// The trade ledger, generic over the storage backend.
#[derive(Clone)]
pub struct TradeLedger {
    store: Arc<dyn RecordStore>,
}

impl TradeLedger {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Lists all trades, newest `created_at` first.
    ///
    /// The sort happens here, at read time, for every backend. The document
    /// store returns insertion order and the relational store already sorts
    /// in SQL; sorting again keeps the contract identical across both.
    pub async fn list(&self) -> Result<Vec<Trade>, LedgerError> {
        let mut trades = self.store.list_trades().await?;
        trades.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(trades)
    }

    /// Creates a trade: generates a fresh id, stamps the current time in
    /// milliseconds, appends to the store, and returns the full record.
    pub async fn create(&self, new_trade: NewTrade) -> Result<Trade, LedgerError> {
        let trade = Trade {
            id: Uuid::new_v4(),
            company: new_trade.company,
            leverage: new_trade.leverage,
            trade_type: new_trade.trade_type,
            quantity: new_trade.quantity,
            user: new_trade.user,
            created_at: Utc::now().timestamp_millis(),
        };
        self.store.put_trade(&trade).await?;
        Ok(trade)
    }

    /// Deletes the trade with this id, or fails with
    /// [`LedgerError::NotFound`] if no such trade exists.
    pub async fn delete(&self, id: Uuid) -> Result<(), LedgerError> {
        if self.store.delete_trade(id).await? {
            Ok(())
        } else {
            Err(LedgerError::NotFound)
        }
    }
}
