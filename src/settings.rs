use config::{Config, ConfigError, File, FileFormat};
use headon_navigation::{MotionConfig, ScenarioConfig};
use serde::Deserialize;
use tracing::{error, info};

const DEFAULT_CONFIG_PATH: &str = "config/default.toml";
const CONFIG_PATH_ENV: &str = "HEADON_CONFIG";

/// Everything the viewer reads at startup. Missing keys keep their defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub motion: MotionConfig,
    pub scenario: ScenarioConfig,
}

/// `$HEADON_CONFIG` if set, otherwise `config/default.toml`.
pub fn config_path() -> String {
    std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string())
}

pub fn load_config(path: &str) -> Result<AppConfig, ConfigError> {
    info!("Attempting to load configuration from {}", path);

    let settings = Config::builder()
        .add_source(File::new(path, FileFormat::Toml).required(true))
        .build()
        .and_then(|config| config.try_deserialize::<AppConfig>());

    match settings {
        Ok(app) => {
            info!("Successfully loaded configuration: {:?}", app);
            Ok(app)
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            Err(e)
        }
    }
}

#[cfg(test)]
fn parse_config(toml: &str) -> Result<AppConfig, ConfigError> {
    Config::builder()
        .add_source(File::from_str(toml, FileFormat::Toml))
        .build()?
        .try_deserialize::<AppConfig>()
}
