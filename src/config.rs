use serde::{Deserialize, Serialize};
use std::path::Path;
use anyhow::Result;

use crate::codec::CodecError;
use crate::utils::limits::WORD_LEN;

pub const DEFAULT_CONFIG_FILE: &str = "varint.toml";
pub const DEFAULT_LOG_FILTER: &str = "varint=info";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolConfig {
    /// Bytes per big-endian word read from the source
    pub word_size: usize,
    /// Byte offset of the word within the source file
    pub offset: u64,
    pub log_filter: String,
    pub json: bool,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            word_size: WORD_LEN,
            offset: 0,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            json: false,
        }
    }
}

impl ToolConfig {
    /// Read the config file if it exists, defaults otherwise
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let config_file = config_path.unwrap_or(DEFAULT_CONFIG_FILE);

        let config = if Path::new(config_file).exists() {
            let content = std::fs::read_to_string(config_file)?;
            toml::from_str(&content)?
        } else if config_path.is_some() {
            anyhow::bail!("config file not found: {}", config_file);
        } else {
            Self::default()
        };

        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, config_path: impl AsRef<Path>) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), CodecError> {
        if self.word_size == 0 || self.word_size > WORD_LEN {
            return Err(CodecError::InvalidWidth(self.word_size));
        }
        Ok(())
    }
}
