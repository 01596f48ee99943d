use axum::{
    Router,
    routing::{delete, get, post},
};
use configuration::{Backend, Config};
use ledger::TradeLedger;
use std::net::SocketAddr;
use std::sync::Arc;
use store::{DocumentStore, PgStore, RecordStore};
use tower_http::{
    cors::{AllowHeaders, AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

pub mod error;
pub mod handlers;

/// The shared application state that all handlers can access.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn RecordStore>,
    pub ledger: TradeLedger,
}

/// Builds the application router over an injected record store.
///
/// Exposed separately from [`run_server`] so tests can drive the full
/// routing/extraction/response stack without binding a socket.
pub fn router(store: Arc<dyn RecordStore>) -> Router {
    let ledger = TradeLedger::new(store.clone());
    let app_state = Arc::new(AppState { store, ledger });

    // The game client is a browser; allow any origin.
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods(Any)
        .allow_headers(AllowHeaders::any());

    Router::new()
        .route("/", get(handlers::health_check))
        .route(
            "/api/leverage-trades",
            get(handlers::get_trades).post(handlers::create_trade),
        )
        .route("/api/leverage-trades/:id", delete(handlers::delete_trade))
        .route("/api/rankings/clubs", get(handlers::get_club_rankings))
        .route("/api/rankings/users", get(handlers::get_user_rankings))
        .route("/api/game/sync", post(handlers::sync_game))
        .with_state(app_state)
        .layer(cors)
        // This middleware will automatically log information about every incoming request.
        .layer(TraceLayer::new_for_http())
}

/// Selects and opens the record store named by the configuration.
pub async fn build_store(config: &Config) -> anyhow::Result<Arc<dyn RecordStore>> {
    let store: Arc<dyn RecordStore> = match config.storage.backend {
        Backend::Document => {
            let store = DocumentStore::open(&config.storage.data_file).await?;
            tracing::info!(path = %config.storage.data_file.display(), "Using document store");
            Arc::new(store)
        }
        Backend::Postgres => {
            let pool = store::connect().await?;
            store::run_migrations(&pool).await?;
            tracing::info!("Using PostgreSQL store");
            Arc::new(PgStore::new(pool))
        }
    };
    Ok(store)
}

/// The main function to configure and run the web server.
pub async fn run_server(addr: SocketAddr, store: Arc<dyn RecordStore>) -> anyhow::Result<()> {
    let app = router(store);

    tracing::info!("Web server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
