use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_GAME_TYPE: &str = "rpg";
pub const DEFAULT_THEME: &str = "fantasy";
pub const DEFAULT_LENGTH: &str = "medium";
pub const DEFAULT_PLATFORM: &str = "PC";
pub const DEFAULT_STYLE: &str = "epic";
pub const DEFAULT_OUTPUT_DIR: &str = "output";

#[derive(Debug, Error)]
pub enum BatchError {
    #[error("failed to read batch descriptor {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("JSON deserialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
}

/// Raw, un-normalized selection parameters for one document.
///
/// Field names follow the batch descriptor format, so `game_type` is
/// spelled `type` on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    #[serde(rename = "type", default = "default_game_type")]
    pub game_type: String,
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_length")]
    pub length: String,
    #[serde(default = "default_platform")]
    pub platform: String,
    #[serde(default = "default_style")]
    pub style: String,
    /// Output directory; `None` defers to the caller's default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self {
            game_type: default_game_type(),
            theme: default_theme(),
            length: default_length(),
            platform: default_platform(),
            style: default_style(),
            output: None,
        }
    }
}

fn default_game_type() -> String {
    DEFAULT_GAME_TYPE.to_string()
}

fn default_theme() -> String {
    DEFAULT_THEME.to_string()
}

fn default_length() -> String {
    DEFAULT_LENGTH.to_string()
}

fn default_platform() -> String {
    DEFAULT_PLATFORM.to_string()
}

fn default_style() -> String {
    DEFAULT_STYLE.to_string()
}

/// A list of requests to generate one after another.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchDescriptor {
    #[serde(default)]
    pub games: Vec<GenerationRequest>,
}

impl BatchDescriptor {
    /// Load a descriptor file. Files ending in `.ron` are read as RON,
    /// everything else as JSON.
    pub fn load(path: &Path) -> Result<BatchDescriptor, BatchError> {
        let contents = std::fs::read_to_string(path).map_err(|source| BatchError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        if path.extension().and_then(|s| s.to_str()) == Some("ron") {
            Self::parse_ron(&contents)
        } else {
            Self::parse_json(&contents)
        }
    }

    pub fn parse_json(input: &str) -> Result<BatchDescriptor, BatchError> {
        Ok(serde_json::from_str(input)?)
    }

    pub fn parse_ron(input: &str) -> Result<BatchDescriptor, BatchError> {
        Ok(ron::from_str(input)?)
    }
}
