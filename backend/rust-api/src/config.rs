use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};

use config::ConfigError;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_SCORES_FILE: &str = "scores.json";
pub const DEFAULT_STATIC_DIR: &str = "static";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub scores_path: PathBuf,
    pub static_dir: PathBuf,
    pub question_bank_path: Option<PathBuf>,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        // Determine environment (defaults to dev)
        let env = env::var("APP_ENV").unwrap_or_else(|_| "dev".to_string());

        // Build configuration from config/*.toml + ENV overrides
        let settings = config::Config::builder()
            .add_source(config::File::with_name(&format!("config/{}", env)).required(false))
            // Override with environment variables (prefix: APP_)
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .build()?;

        Self::from_settings(&settings)
    }

    /// Resolves every key from `settings`, falling back to plain env vars and
    /// then to the built-in defaults.
    pub fn from_settings(settings: &config::Config) -> Result<Self, ConfigError> {
        let host = settings
            .get_string("server.host")
            .or_else(|_| env::var("HOST"))
            .unwrap_or_else(|_| DEFAULT_HOST.to_string());

        let port = match settings.get_int("server.port") {
            Ok(raw) => u16::try_from(raw)
                .map_err(|_| ConfigError::Message(format!("server.port out of range: {raw}")))?,
            Err(_) => match env::var("PORT") {
                Ok(raw) => raw
                    .parse()
                    .map_err(|_| ConfigError::Message(format!("PORT is not a port: {raw}")))?,
                Err(_) => DEFAULT_PORT,
            },
        };

        let scores_path = settings
            .get_string("storage.scores_path")
            .or_else(|_| env::var("SCORES_FILE"))
            .unwrap_or_else(|_| DEFAULT_SCORES_FILE.to_string());

        let static_dir = settings
            .get_string("assets.static_dir")
            .or_else(|_| env::var("STATIC_DIR"))
            .unwrap_or_else(|_| DEFAULT_STATIC_DIR.to_string());

        let question_bank_path = settings
            .get_string("quiz.question_bank_path")
            .or_else(|_| env::var("QUESTION_BANK_FILE"))
            .ok()
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        Ok(Config {
            host,
            port,
            scores_path: PathBuf::from(scores_path),
            static_dir: PathBuf::from(static_dir),
            question_bank_path,
        })
    }

    /// Config with every file rooted in `root`, on an ephemeral local port.
    pub fn for_root(root: &Path) -> Self {
        Config {
            host: "127.0.0.1".to_string(),
            port: 0,
            scores_path: root.join(DEFAULT_SCORES_FILE),
            static_dir: root.join(DEFAULT_STATIC_DIR),
            question_bank_path: None,
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn models_dir(&self) -> PathBuf {
        self.static_dir.join("models")
    }
}
