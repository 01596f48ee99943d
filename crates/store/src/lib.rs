//! # Record Store Crate
//!
//! This crate is the durable-storage layer for the trade and user
//! collections. It exposes a single abstract interface, [`RecordStore`],
//! with two interchangeable backends:
//!
//! - [`DocumentStore`]: the whole dataset lives in one JSON file; every
//!   operation reads the full file, mutates in memory, and rewrites it.
//! - [`PgStore`]: each record is a PostgreSQL row; operations act on
//!   individual rows via primary-key lookup.
//!
//! Both backends satisfy identical external semantics, so the rest of the
//! application receives an injected `Arc<dyn RecordStore>` and never knows
//! which one it is talking to.
//!
//! ## Public API
//!
//! - `RecordStore`: the abstract store trait.
//! - `DocumentStore` / `PgStore`: the two backends.
//! - `connect` / `run_migrations`: PostgreSQL pool setup helpers.
//! - `StoreError`: the specific error types that can be returned from this crate.

use async_trait::async_trait;
use core_types::{Trade, User};
use uuid::Uuid;

// Declare the modules that constitute this crate.
pub mod connection;
pub mod document;
pub mod error;
pub mod postgres;

// Re-export the key components to create a clean, public-facing API.
pub use connection::{connect, run_migrations};
pub use document::DocumentStore;
pub use error::StoreError;
pub use postgres::PgStore;

/// Abstract storage for the two entity collections.
///
/// `put_*` operations are insert-or-replace by id. `delete_trade` reports
/// whether a record actually existed. `list_trades` returns the backend's
/// native order; callers that need newest-first must sort explicitly.
///
/// I/O or connectivity failures are not recovered here; they propagate to
/// the caller and fail the whole request.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn list_trades(&self) -> Result<Vec<Trade>, StoreError>;
    async fn get_trade(&self, id: Uuid) -> Result<Option<Trade>, StoreError>;
    async fn put_trade(&self, trade: &Trade) -> Result<(), StoreError>;
    /// Returns `true` if a trade with this id existed and was removed.
    async fn delete_trade(&self, id: Uuid) -> Result<bool, StoreError>;

    async fn list_users(&self) -> Result<Vec<User>, StoreError>;
    async fn get_user(&self, id: &str) -> Result<Option<User>, StoreError>;
    async fn put_user(&self, user: &User) -> Result<(), StoreError>;
}
