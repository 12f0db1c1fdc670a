use config::{Case, Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// OpenWeatherMap API key. Held as an option so an unconfigured
    /// deployment serves a per-request 500 instead of failing startup.
    #[serde(default)]
    pub openweather_api_key: Option<String>,

    /// Single origin allowed for CORS; any origin when unset
    #[serde(default)]
    pub cors_allowed_origin: Option<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present
        let _ = dotenvy::dotenv();

        let config = Config::builder()
            // Start with default values
            .set_default("host", default_host())?
            .set_default("port", default_port())?
            // Load from config file if present
            .add_source(File::with_name("config").required(false))
            .add_source(File::with_name("config.local").required(false))
            // Override with environment variables (prefixed with CUACA_)
            // Convert SCREAMING_SNAKE_CASE env vars to snake_case config keys
            .add_source(
                Environment::with_prefix("CUACA")
                    .prefix_separator("_")
                    .separator("__")
                    .convert_case(Case::Snake)
                    .try_parsing(true),
            )
            .build()?;

        let mut config: AppConfig = config.try_deserialize()?;

        // The original deployment exposed the key under an unprefixed name
        if config.openweather_api_key.is_none() {
            config.openweather_api_key = std::env::var("OPENWEATHER_API_KEY")
                .ok()
                .filter(|v| !v.is_empty());
        }

        Ok(config)
    }
}
