//! # Game-Sync Upserter
//!
//! Merges incoming progress reports into the User collection. Each sync is
//! a full replace of the user's mutable fields keyed by `userId`; retrying
//! an identical call always lands in the same final state.

use core_types::User;
use serde::Deserialize;
use store::{RecordStore, StoreError};

/// A progress report from the game client. Every field except `userId` is
/// optional and defaults to zero / absent.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncRequest {
    pub user_id: String,
    #[serde(default)]
    pub current_stage: i64,
    #[serde(default)]
    pub max_stage: i64,
    #[serde(default)]
    pub attempts: i64,
    #[serde(default)]
    pub club_name: Option<String>,
    #[serde(default)]
    pub total_assets: Option<i64>,
}

/// Upserts the user record for `request.user_id`.
///
/// When the report carries no `totalAssets`, the stored value defaults to
/// `maxStage`. Existing records are fully overwritten (insert-or-replace by
/// id); first-time ids are inserted.
pub async fn sync_user(store: &dyn RecordStore, request: SyncRequest) -> Result<(), StoreError> {
    let total_assets = request.total_assets.unwrap_or(request.max_stage);
    let user = User {
        id: request.user_id,
        stage: request.current_stage,
        max_stage: request.max_stage,
        attempts: request.attempts,
        club_name: request.club_name,
        total_assets: Some(total_assets),
    };
    store.put_user(&user).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::DocumentStore;

    fn request(user_id: &str) -> SyncRequest {
        SyncRequest {
            user_id: user_id.to_string(),
            current_stage: 0,
            max_stage: 0,
            attempts: 0,
            club_name: None,
            total_assets: None,
        }
    }

    #[tokio::test]
    async fn first_sync_creates_the_user_with_defaulted_assets() {
        let dir = tempfile::tempdir().unwrap();
        let store = DocumentStore::open(dir.path().join("db.json")).await.unwrap();

        sync_user(
            &store,
            SyncRequest {
                max_stage: 5,
                ..request("u1")
            },
        )
        .await
        .unwrap();

        let user = store.get_user("u1").await.unwrap().unwrap();
        assert_eq!(user.max_stage, 5);
        assert_eq!(user.total_assets, Some(5));
    }

    #[tokio::test]
    async fn second_sync_overwrites_without_duplicating() {
        let dir = tempfile::tempdir().unwrap();
        let store = DocumentStore::open(dir.path().join("db.json")).await.unwrap();

        sync_user(
            &store,
            SyncRequest {
                max_stage: 5,
                ..request("u1")
            },
        )
        .await
        .unwrap();
        sync_user(
            &store,
            SyncRequest {
                max_stage: 5,
                total_assets: Some(99),
                club_name: Some("A".to_string()),
                ..request("u1")
            },
        )
        .await
        .unwrap();

        let users = store.list_users().await.unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].total_assets, Some(99));
        assert_eq!(users[0].club_name, Some("A".to_string()));
    }

    #[tokio::test]
    async fn identical_retries_are_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = DocumentStore::open(dir.path().join("db.json")).await.unwrap();

        let report = SyncRequest {
            current_stage: 2,
            max_stage: 7,
            attempts: 4,
            ..request("u1")
        };
        sync_user(&store, report.clone()).await.unwrap();
        let first = store.get_user("u1").await.unwrap();
        sync_user(&store, report).await.unwrap();
        let second = store.get_user("u1").await.unwrap();

        assert_eq!(first, second);
        assert_eq!(store.list_users().await.unwrap().len(), 1);
    }

    #[test]
    fn request_fields_default_when_missing_from_the_body() {
        let request: SyncRequest = serde_json::from_str(r#"{"userId": "u9"}"#).unwrap();
        assert_eq!(request.user_id, "u9");
        assert_eq!(request.current_stage, 0);
        assert_eq!(request.max_stage, 0);
        assert_eq!(request.attempts, 0);
        assert_eq!(request.club_name, None);
        assert_eq!(request.total_assets, None);
    }
}
