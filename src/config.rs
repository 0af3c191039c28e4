use crate::error::{ResumeAiError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 結果台帳（Excel）のパス
    pub store_path: PathBuf,
    /// 追加ストップワード（キーワード抽出から除外する語）
    pub extra_stop_words: Vec<String>,
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
            .ok_or_else(|| ResumeAiError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("resume-ai").join("config.json"))
    }

    pub fn set_store_path(&mut self, path: PathBuf) -> Result<()> {
        self.store_path = path;
        self.save()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from(crate::store::DEFAULT_STORE_FILE),
            extra_stop_words: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.store_path, PathBuf::from("results.xlsx"));
        assert!(config.extra_stop_words.is_empty());
    }

    #[test]
    fn test_config_roundtrip_json() {
        let config = Config {
            store_path: PathBuf::from("out/results.xlsx"),
            extra_stop_words: vec!["inc".to_string(), "ltd".to_string()],
        };

        let json = serde_json::to_string(&config).expect("serialize");
        let loaded: Config = serde_json::from_str(&json).expect("deserialize");

        assert_eq!(loaded.store_path, config.store_path);
        assert_eq!(loaded.extra_stop_words, config.extra_stop_words);
    }

    #[test]
    fn test_config_partial_json() {
        // フィールド欠落のある設定ファイルも読める
        let loaded: Config =
            serde_json::from_str(r#"{"store_path": "custom.xlsx"}"#).expect("deserialize");
        assert_eq!(loaded.store_path, PathBuf::from("custom.xlsx"));
        assert!(loaded.extra_stop_words.is_empty());
    }
}
