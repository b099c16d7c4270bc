use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ViewerConfig {
    #[serde(default)]
    pub placeholders: Placeholders,
    #[serde(default = "default_skill_suffix")]
    pub skill_suffix: String,
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_skill_suffix() -> String {
    " Jobs".to_string()
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            placeholders: Placeholders::default(),
            skill_suffix: default_skill_suffix(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Strings substituted for absent record fields.
///
/// `category` covers type, level and skill. The skill filter options leave
/// this value out.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Placeholders {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_not_available")]
    pub posted: String,
    #[serde(default = "default_not_available")]
    pub category: String,
    #[serde(default = "default_detail")]
    pub detail: String,
}

fn default_title() -> String {
    "No Title".to_string()
}

fn default_not_available() -> String {
    "N/A".to_string()
}

fn default_detail() -> String {
    "No details available".to_string()
}

impl Default for Placeholders {
    fn default() -> Self {
        Self {
            title: default_title(),
            posted: default_not_available(),
            category: default_not_available(),
            detail: default_detail(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}
