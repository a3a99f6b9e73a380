use crate::error::{PhotoStatusError, Result};
use crate::session::DisplayFailurePolicy;
use photo_status_common::StatusCatalog;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 日付フォルダ（YYYYMMDD）を置くディレクトリ
    pub root_dir: PathBuf,
    /// 選択できるステータスの一覧
    pub catalog: StatusCatalog,
    /// 画像表示に失敗したときの扱い
    pub on_display_error: DisplayFailurePolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root_dir: PathBuf::from("."),
            catalog: StatusCatalog::default(),
            on_display_error: DisplayFailurePolicy::default(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(config_path)?;
        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| PhotoStatusError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("photo-status").join("config.json"))
    }

    fn validate(&self) -> Result<()> {
        if self.catalog.is_empty() {
            return Err(PhotoStatusError::Config(
                "catalog にステータスが1つもありません".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_config_uses_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.json")).unwrap();

        assert_eq!(config.root_dir, PathBuf::from("."));
        assert_eq!(config.catalog, StatusCatalog::default());
        assert_eq!(config.on_display_error, DisplayFailurePolicy::KeepPrior);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let config = Config {
            root_dir: PathBuf::from("/data/screenshots"),
            on_display_error: DisplayFailurePolicy::Drop,
            ..Config::default()
        };
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.root_dir, PathBuf::from("/data/screenshots"));
        assert_eq!(loaded.on_display_error, DisplayFailurePolicy::Drop);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "on_display_error": "drop" }"#).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.on_display_error, DisplayFailurePolicy::Drop);
        assert!(!config.catalog.is_empty());
    }

    #[test]
    fn test_empty_catalog_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "catalog": [] }"#).unwrap();

        let result = Config::load_from(&path);
        assert!(matches!(result, Err(PhotoStatusError::Config(_))));
    }
}
