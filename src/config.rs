use crate::error::{RenamerError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub default_prefix: String,
    pub max_files: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_prefix: "renamed_".into(),
            max_files: 100,  // 1回の実行で処理する上限
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| RenamerError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("renamer-rust").join("config.json"))
    }

    pub fn set_default_prefix(&mut self, prefix: String) -> Result<()> {
        self.default_prefix = prefix;
        self.save()
    }
}
