use crate::RecordStore;
use crate::error::StoreError;
use async_trait::async_trait;
use core_types::{Trade, User};
use sqlx::postgres::PgPool;
use uuid::Uuid;

/// The PostgreSQL-backed record store.
///
/// Each record is a single row, addressed by primary key. Atomicity across
/// concurrent requests comes from the database's own row-level isolation;
/// this layer adds no locking of its own.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Creates a new `PgStore` with a shared database connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecordStore for PgStore {
    /// Trades newest-first straight from the query.
    async fn list_trades(&self) -> Result<Vec<Trade>, StoreError> {
        let trades = sqlx::query_as::<_, Trade>(
            r#"
            SELECT id, company, leverage, trade_type, quantity, user_id, created_at
            FROM trades
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(trades)
    }

    async fn get_trade(&self, id: Uuid) -> Result<Option<Trade>, StoreError> {
        let trade = sqlx::query_as::<_, Trade>(
            r#"
            SELECT id, company, leverage, trade_type, quantity, user_id, created_at
            FROM trades
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(trade)
    }

    async fn put_trade(&self, trade: &Trade) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO trades (id, company, leverage, trade_type, quantity, user_id, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (id) DO UPDATE SET
                company = EXCLUDED.company,
                leverage = EXCLUDED.leverage,
                trade_type = EXCLUDED.trade_type,
                quantity = EXCLUDED.quantity,
                user_id = EXCLUDED.user_id,
                created_at = EXCLUDED.created_at
            "#,
        )
        .bind(trade.id)
        .bind(&trade.company)
        .bind(trade.leverage)
        .bind(&trade.trade_type)
        .bind(trade.quantity)
        .bind(&trade.user)
        .bind(trade.created_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn delete_trade(&self, id: Uuid) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM trades WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn list_users(&self) -> Result<Vec<User>, StoreError> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, stage, max_stage, attempts, club_name, total_assets
            FROM users
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(users)
    }

    async fn get_user(&self, id: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, stage, max_stage, attempts, club_name, total_assets
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    /// Full-replace upsert: every mutable column is overwritten on conflict.
    async fn put_user(&self, user: &User) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO users (id, stage, max_stage, attempts, club_name, total_assets)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (id) DO UPDATE SET
                stage = EXCLUDED.stage,
                max_stage = EXCLUDED.max_stage,
                attempts = EXCLUDED.attempts,
                club_name = EXCLUDED.club_name,
                total_assets = EXCLUDED.total_assets
            "#,
        )
        .bind(&user.id)
        .bind(user.stage)
        .bind(user.max_stage)
        .bind(user.attempts)
        .bind(&user.club_name)
        .bind(user.total_assets)
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}
