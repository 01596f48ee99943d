use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to load environment variables for database connection: {0}")]
    ConnectionConfig(String),

    #[error("Database operation failed: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Database migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Failed to read or write the data file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize or deserialize stored records: {0}")]
    Json(#[from] serde_json::Error),
}
