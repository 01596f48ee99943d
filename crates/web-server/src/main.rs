use std::net::SocketAddr;

// This main function is the entry point when running `cargo run -p web-server`.
// Its only job is to build the configured store and hand it to `run_server`.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = configuration::load_config()?;
    let store = web_server::build_store(&config).await?;
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    web_server::run_server(addr, store).await
}
