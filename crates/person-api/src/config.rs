//! Runtime settings, layered from defaults, an optional `person-app` config
//! file and `PERSON_APP_*` environment variables.

use person_core::ProviderType;
use serde::Deserialize;
use std::path::PathBuf;

const ENV_PREFIX: &str = "PERSON_APP";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub provider: ProviderType,
    /// Delimited text file replacing the bundled data
    #[serde(default)]
    pub data_file: Option<PathBuf>,
    #[serde(default)]
    pub database_url: Option<String>,
    pub max_connections: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            provider: ProviderType::Csv,
            data_file: None,
            database_url: None,
            max_connections: 5,
        }
    }
}

impl Settings {
    pub fn load() -> Result<Self, config::ConfigError> {
        let defaults = Settings::default();

        let mut settings: Settings = config::Config::builder()
            .set_default("host", defaults.host)?
            .set_default("port", i64::from(defaults.port))?
            .set_default("provider", defaults.provider.to_string())?
            .set_default("max_connections", i64::from(defaults.max_connections))?
            .add_source(config::File::with_name("person-app").required(false))
            .add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?
            .try_deserialize()?;

        if settings.database_url.is_none() {
            settings.database_url = std::env::var("DATABASE_URL").ok();
        }

        Ok(settings)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
