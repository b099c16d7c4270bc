use std::path::Path;

use tracing_subscriber::EnvFilter;

use crate::config::schema::ViewerConfig;
use crate::error::ConfigError;

/// Serialization format of a config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Json,
}

impl ConfigFormat {
    /// Picks the format from the file extension. Anything that is not
    /// `.json` is read as YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ConfigFormat::Json,
            _ => ConfigFormat::Yaml,
        }
    }
}

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<ViewerConfig, ConfigError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })?;

    load_config_from_str(&content, ConfigFormat::from_path(path))
}

pub fn load_config_from_str(
    content: &str,
    format: ConfigFormat,
) -> Result<ViewerConfig, ConfigError> {
    let config: ViewerConfig = match format {
        ConfigFormat::Yaml => serde_yaml::from_str(content)?,
        ConfigFormat::Json => serde_json::from_str(content)?,
    };

    validate_config(&config)?;

    Ok(config)
}

fn validate_config(config: &ViewerConfig) -> Result<(), ConfigError> {
    if config.skill_suffix.is_empty() {
        return Err(ConfigError::Validation {
            message: "skill_suffix must not be empty".to_string(),
        });
    }

    if let Err(e) = EnvFilter::try_new(&config.logging.level) {
        return Err(ConfigError::Validation {
            message: format!("Invalid logging level '{}': {}", config.logging.level, e),
        });
    }

    Ok(())
}
