//! Game configuration file
//!
//! A small JSON document, e.g.
//!
//! ```json
//! { "target_word": "crate", "max_turns": 6, "word_list": "valid_words.txt" }
//! ```
//!
//! Every field is optional. Command-line flags override the file.

use crate::core::Word;
use crate::error::ConfigError;
use crate::session::DEFAULT_MAX_TURNS;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GameConfig {
    /// Hidden word; a random vocabulary word is used when absent
    #[serde(default)]
    pub target_word: Option<String>,

    #[serde(default = "default_max_turns")]
    pub max_turns: usize,

    /// Newline-delimited vocabulary; the embedded list is used when absent
    #[serde(default)]
    pub word_list: Option<PathBuf>,
}

const fn default_max_turns() -> usize {
    DEFAULT_MAX_TURNS
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            target_word: None,
            max_turns: DEFAULT_MAX_TURNS,
            word_list: None,
        }
    }
}

impl GameConfig {
    /// Read and validate a config file
    ///
    /// A relative `word_list` is resolved against the config file's directory.
    ///
    /// # Errors
    /// Returns `ConfigError::Io` if the file cannot be read, or any error from
    /// [`GameConfig::from_json`].
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut config = Self::from_json(&content)?;
        if let Some(list) = &config.word_list
            && list.is_relative()
            && let Some(dir) = path.parent()
        {
            config.word_list = Some(dir.join(list));
        }

        log::debug!("loaded config from {}: {config:?}", path.display());
        Ok(config)
    }

    /// Parse and validate a config document
    ///
    /// # Errors
    /// - `ConfigError::Parse` for malformed JSON or unknown fields
    /// - `ConfigError::InvalidTarget` if `target_word` is not a word
    /// - `ConfigError::InvalidMaxTurns` if `max_turns` is zero
    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(content)?;

        if config.max_turns == 0 {
            return Err(ConfigError::InvalidMaxTurns);
        }
        config.target()?;

        Ok(config)
    }

    /// The configured target, normalized
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidTarget` if the target is not a word.
    pub fn target(&self) -> Result<Option<Word>, ConfigError> {
        self.target_word
            .as_deref()
            .map(|text| Word::new(text.trim()).map_err(ConfigError::InvalidTarget))
            .transpose()
    }
}
