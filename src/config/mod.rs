/// Database connection and schema creation
pub mod database;

/// Application settings loaded from config.toml and the environment
pub mod settings;

pub use settings::{
    AppConfig, DatabaseConfig, FixtureMapping, FixturesConfig, PlanningConfig, ServerConfig,
    load_app_configuration,
};
