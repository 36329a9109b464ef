/// Configuration file loading
use glyph3d_core::{ConfigError, RenderConfig};
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum ConfigLoadError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid config: {0}")]
    Invalid(#[from] ConfigError),
}

/// Parse TOML text into a validated config; missing keys keep their defaults
pub fn parse_config(text: &str, origin: &str) -> Result<RenderConfig, ConfigLoadError> {
    let config: RenderConfig = toml::from_str(text).map_err(|source| ConfigLoadError::Parse {
        path: origin.to_string(),
        source,
    })?;
    config.validate()?;
    Ok(config)
}

pub fn load_config(path: &Path) -> Result<RenderConfig, ConfigLoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigLoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let config = parse_config(&text, &path.display().to_string())?;
    tracing::info!(path = %path.display(), "loaded configuration");
    Ok(config)
}
