use core_config::{AppInfo, FromEnv, app_info, server::ServerConfig};
use database::mongodb::MongoConfig;

pub use core_config::Environment;

/// Runtime configuration for the board API
///
/// Composed from the shared config crates: HTTP binding, the board store
/// connection, and the deployment environment.
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub mongodb: MongoConfig,
    pub server: ServerConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let app = app_info!();
        let environment = Environment::from_env();
        let mut mongodb = MongoConfig::from_env()?;
        let server = ServerConfig::from_env()?;

        // Surface the API name in MongoDB server logs unless overridden
        if mongodb.app_name.is_none() {
            mongodb.app_name = Some(app.name.to_string());
        }

        Ok(Self {
            app,
            mongodb,
            server,
            environment,
        })
    }
}
