use crate::error::ConfigError;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use settings::{Backend, Config, Server, Storage};

/// Loads the application configuration.
///
/// Defaults are applied first, then an optional `config.toml` in the working
/// directory, then environment overrides of the form `APP__SERVER__PORT=9000`.
pub fn load_config() -> Result<Config, ConfigError> {
    let builder = config::Config::builder()
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 8000)?
        .set_default("storage.backend", "document")?
        .set_default("storage.data_file", "data/db.json")?
        .add_source(config::File::with_name("config.toml").required(false))
        .add_source(config::Environment::with_prefix("APP").separator("__"))
        .build()?;

    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = builder.try_deserialize::<Config>()?;

    Ok(config)
}
