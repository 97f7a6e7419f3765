use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub sessions: SessionConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    /// Flights generated per search and per analytics request
    #[serde(default = "default_catalog_size")]
    pub size: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SessionConfig {
    /// Oldest session is evicted once this many are live
    #[serde(default = "default_max_sessions")]
    pub max_sessions: usize,
}

fn default_port() -> u16 {
    8080
}

fn default_catalog_size() -> usize {
    skywings_catalog::DEFAULT_CATALOG_SIZE
}

fn default_max_sessions() -> usize {
    10_000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: default_port() }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self { size: default_catalog_size() }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { max_sessions: default_max_sessions() }
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // e.g. `SKYWINGS__CATALOG__SIZE=100`
            .add_source(config::Environment::with_prefix("SKYWINGS").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
