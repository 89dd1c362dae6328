use std::fs;
use std::path::Path;

use crate::io::log;
use crate::model::config::Config;

/// Error type for config I/O
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read config: {0}")]
    Read(#[from] std::io::Error),
    #[error("could not parse config.toml: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Read `config.toml` from the data directory.
/// Missing file → defaults. Malformed file → error.
pub fn read_config(dir: &Path) -> Result<Config, ConfigError> {
    let path = dir.join("config.toml");
    if !path.exists() {
        return Ok(Config::default());
    }
    let content = fs::read_to_string(&path)?;
    Ok(toml::from_str(&content)?)
}

/// Read the config, falling back to defaults on any failure.
/// Failures are logged, not surfaced — same policy as collection loads.
pub fn read_config_or_default(dir: &Path) -> Config {
    match read_config(dir) {
        Ok(config) => config,
        Err(e) => {
            log::log_error(dir, "load config", &e);
            Config::default()
        }
    }
}
