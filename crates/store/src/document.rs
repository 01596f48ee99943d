use crate::RecordStore;
use crate::error::StoreError;
use async_trait::async_trait;
use core_types::{Trade, User};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;
use uuid::Uuid;

/// The shape of the JSON database file: both collections in one document.
#[derive(Debug, Default, Serialize, Deserialize)]
struct Document {
    #[serde(default)]
    trades: Vec<Trade>,
    #[serde(default)]
    users: Vec<User>,
}

/// The document-backed record store.
///
/// The entire dataset is one serialized JSON structure on disk. Every
/// operation reads the full file, mutates it in memory, and rewrites the
/// full file. There is no partial I/O and no cross-request locking, so two
/// concurrent writers can lose an update.
#[derive(Debug, Clone)]
pub struct DocumentStore {
    path: PathBuf,
}

impl DocumentStore {
    /// Opens the store at `path`, creating the parent directory and an
    /// empty-collections file if they do not exist yet.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }
        if !fs::try_exists(&path).await? {
            let store = Self { path };
            tracing::info!(path = %store.path.display(), "Initializing empty database file");
            store.write(&Document::default()).await?;
            return Ok(store);
        }
        Ok(Self { path })
    }

    async fn read(&self) -> Result<Document, StoreError> {
        let bytes = fs::read(&self.path).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn write(&self, doc: &Document) -> Result<(), StoreError> {
        // Pretty-printed so the file stays hand-inspectable.
        let bytes = serde_json::to_vec_pretty(doc)?;
        fs::write(&self.path, bytes).await?;
        Ok(())
    }
}

#[async_trait]
impl RecordStore for DocumentStore {
    /// Trades in insertion order; the ledger sorts newest-first on read.
    async fn list_trades(&self) -> Result<Vec<Trade>, StoreError> {
        Ok(self.read().await?.trades)
    }

    async fn get_trade(&self, id: Uuid) -> Result<Option<Trade>, StoreError> {
        let doc = self.read().await?;
        Ok(doc.trades.into_iter().find(|t| t.id == id))
    }

    async fn put_trade(&self, trade: &Trade) -> Result<(), StoreError> {
        let mut doc = self.read().await?;
        match doc.trades.iter_mut().find(|t| t.id == trade.id) {
            Some(existing) => *existing = trade.clone(),
            None => doc.trades.push(trade.clone()),
        }
        self.write(&doc).await
    }

    async fn delete_trade(&self, id: Uuid) -> Result<bool, StoreError> {
        let mut doc = self.read().await?;
        let before = doc.trades.len();
        doc.trades.retain(|t| t.id != id);
        if doc.trades.len() == before {
            return Ok(false);
        }
        self.write(&doc).await?;
        Ok(true)
    }

    async fn list_users(&self) -> Result<Vec<User>, StoreError> {
        Ok(self.read().await?.users)
    }

    async fn get_user(&self, id: &str) -> Result<Option<User>, StoreError> {
        let doc = self.read().await?;
        Ok(doc.users.into_iter().find(|u| u.id == id))
    }

    async fn put_user(&self, user: &User) -> Result<(), StoreError> {
        let mut doc = self.read().await?;
        match doc.users.iter_mut().find(|u| u.id == user.id) {
            Some(existing) => *existing = user.clone(),
            None => doc.users.push(user.clone()),
        }
        self.write(&doc).await
    }
}
