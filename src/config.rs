use crate::error::{MenuAiError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub target_language: String,
    pub max_image_size: u32,
    pub timeout_seconds: u64,
    pub default_tip_percent: f64,
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
            .ok_or_else(|| MenuAiError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("menu-ai").join("config.json"))
    }

    /// セッションファイルと設定ファイルの置き場所
    pub fn app_dir() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| MenuAiError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("menu-ai"))
    }

    pub fn set_target_language(&mut self, language: String) -> Result<()> {
        self.target_language = language;
        self.save()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target_language: "日本語".into(),
            max_image_size: 1568,  // Vision系モデルの推奨サイズ
            timeout_seconds: 120,
            default_tip_percent: 15.0,
        }
    }
}
