//! Loader for movement configuration files.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::MovementConfigDef;

/// Error type for configuration loading failures.
#[derive(Debug)]
pub struct ConfigLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ConfigLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Ron,
    Json,
}

impl ConfigFormat {
    /// Pick the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "ron" => Some(ConfigFormat::Ron),
            "json" => Some(ConfigFormat::Json),
            _ => None,
        }
    }
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse configuration text. `file` only labels errors.
pub fn parse_movement_config(
    contents: &str,
    format: ConfigFormat,
    file: &str,
) -> Result<MovementConfigDef, ConfigLoadError> {
    let parsed = match format {
        ConfigFormat::Ron => ron_options()
            .from_str::<MovementConfigDef>(contents)
            .map_err(|e| e.to_string()),
        ConfigFormat::Json => {
            serde_json::from_str::<MovementConfigDef>(contents).map_err(|e| e.to_string())
        }
    };

    parsed.map_err(|e| ConfigLoadError {
        file: file.to_string(),
        message: format!("Parse error: {}", e),
    })
}

/// Load a movement configuration file, choosing the parser by extension.
pub fn load_movement_config(path: &Path) -> Result<MovementConfigDef, ConfigLoadError> {
    let file_name = path.display().to_string();

    let format = ConfigFormat::from_path(path).ok_or_else(|| ConfigLoadError {
        file: file_name.clone(),
        message: "unsupported extension, expected .ron or .json".to_string(),
    })?;

    let contents = fs::read_to_string(path).map_err(|e| ConfigLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    parse_movement_config(&contents, format, &file_name)
}
