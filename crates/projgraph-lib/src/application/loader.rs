//! Configuration loading
//!
//! Coordinates loading configuration from env files, the environment and the
//! command line into one validated [`CliConfig`].

use crate::primitives::ConfigError;
use std::path::Path;

use super::{cli::CliConfig, config::AppConfig, env::EnvironmentConfig};

/// Env files read before argument parsing, first match wins per variable
pub const ENV_FILES: [&str; 2] = [".env.local", ".env"];

/// Load config: defaults -> .env -> env vars -> CLI
pub fn load() -> Result<CliConfig, ConfigError> {
    // Env files must be loaded before clap reads env-backed arguments
    load_env_files(Path::new("."))?;

    let cli = CliConfig::parse();
    let env_config = EnvironmentConfig::load()?;
    let app_config = AppConfig::resolve(cli.app_config, &env_config)?;

    Ok(CliConfig {
        app_config,
        command: cli.command,
    })
}

/// Load `.env.local` and `.env` from `dir`; missing files are not an error
pub fn load_env_files(dir: &Path) -> Result<(), ConfigError> {
    for env_file in ENV_FILES {
        let path = dir.join(env_file);
        if let Err(e) = dotenvy::from_path(&path) {
            if !e.not_found() {
                return Err(ConfigError::EnvFileError {
                    file: path.display().to_string(),
                    source: e,
                });
            }
        }
    }
    Ok(())
}

impl AppConfig {
    /// Apply the standard environment and CLI values on top of the defaults
    pub fn resolve(cli: AppConfig, env: &EnvironmentConfig) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.color = env.apply_color_config(config.color);
        config = config.merge_with(cli);
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    include!("loader.test.rs");
}
