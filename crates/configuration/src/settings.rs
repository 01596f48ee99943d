use serde::Deserialize;
use std::path::PathBuf;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: Server,
    pub storage: Storage,
}

/// Network settings for the HTTP server.
#[derive(Debug, Clone, Deserialize)]
pub struct Server {
    /// The interface to bind (e.g., "0.0.0.0").
    pub host: String,
    /// The TCP port to listen on.
    pub port: u16,
}

/// Settings for the record store backing the API.
#[derive(Debug, Clone, Deserialize)]
pub struct Storage {
    /// Which store implementation to use.
    pub backend: Backend,
    /// Path of the JSON database file (document backend only).
    pub data_file: PathBuf,
}

/// The two interchangeable record-store backends. Both expose identical
/// semantics; the relational one reads DATABASE_URL from the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    Document,
    Postgres,
}
