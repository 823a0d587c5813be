use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::env;

use crate::error::{TendaraError, TendaraResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub pipeline: PipelineConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Directory scanned for bid opening source files.
    pub input_dir: String,
    /// Directory the three output files are written to.
    pub output_dir: String,
    /// Base contract value applied before keyword multipliers.
    pub base_value_eur: u64,
    /// Year assigned when a file name carries no year.
    pub default_year: u16,
    /// Fixed RNG seed for reproducible runs; unset draws from the OS.
    #[serde(default)]
    pub rng_seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
    #[serde(default)]
    pub file_path: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        let config = Config::builder()
            // Built-in defaults; files and environment override them
            .set_default("pipeline.input_dir", "bid_documents")?
            .set_default("pipeline.output_dir", "analysis_output")?
            .set_default("pipeline.base_value_eur", 1_000_000u64)?
            .set_default("pipeline.default_year", 2025u16)?
            .set_default("logging.level", "info")?
            .set_default("logging.format", "text")?
            .add_source(File::with_name("config/default").required(false))
            // Add environment-specific config
            .add_source(
                File::with_name(&format!(
                    "config/{}",
                    env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into())
                ))
                .required(false),
            )
            // Add local config (gitignored)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables with TENDARA prefix
            .add_source(Environment::with_prefix("TENDARA").separator("__"));

        config.build()?.try_deserialize()
    }

    /// Checks the loaded configuration for values the pipeline cannot run with.
    pub fn validate(&self) -> TendaraResult<()> {
        if self.pipeline.input_dir.trim().is_empty() {
            return Err(TendaraError::configuration("pipeline.input_dir must not be empty"));
        }
        if self.pipeline.output_dir.trim().is_empty() {
            return Err(TendaraError::configuration("pipeline.output_dir must not be empty"));
        }
        if self.pipeline.base_value_eur == 0 {
            return Err(TendaraError::configuration("pipeline.base_value_eur must be positive"));
        }
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            pipeline: PipelineConfig {
                input_dir: "bid_documents".to_string(),
                output_dir: "analysis_output".to_string(),
                base_value_eur: 1_000_000,
                default_year: 2025,
                rng_seed: None,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                format: "text".to_string(),
                file_path: None,
            },
        }
    }
}
