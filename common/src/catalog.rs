//! ステータスカタログ
//!
//! 表示ラベルと保存ラベルの組の一覧。ここから選んだ保存ラベルが
//! セッションの語彙（Vocabulary）になる。

use crate::error::Result;
use crate::types::Vocabulary;
use serde::{Deserialize, Serialize};

/// カタログの1項目
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// 画面に表示するラベル
    pub display: String,
    /// statuses.json に保存するラベル
    pub stored: String,
}

impl CatalogEntry {
    pub fn new(display: impl Into<String>, stored: impl Into<String>) -> Self {
        Self {
            display: display.into(),
            stored: stored.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatusCatalog {
    entries: Vec<CatalogEntry>,
}

impl StatusCatalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    /// JSONファイルから読み込み
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// JSON文字列から読み込み
    pub fn from_json(json: &str) -> Result<Self> {
        let catalog: Self = serde_json::from_str(json)?;
        Ok(catalog)
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 保存ラベルに対応する表示ラベル（カタログにない場合は保存ラベルのまま）
    pub fn display_for<'a>(&'a self, stored: &'a str) -> &'a str {
        self.entries
            .iter()
            .find(|e| e.stored == stored)
            .map(|e| e.display.as_str())
            .unwrap_or(stored)
    }

    /// 表示ラベル・保存ラベルのどちらで指定されても保存ラベルを返す
    ///
    /// カタログにないラベルはそのまま使う。
    pub fn resolve<'a>(&'a self, label: &'a str) -> &'a str {
        self.entries
            .iter()
            .find(|e| e.stored == label || e.display == label)
            .map(|e| e.stored.as_str())
            .unwrap_or(label)
    }

    /// 指定ラベル（コマンドライン引数など）から語彙を作成
    pub fn vocabulary_from_labels(&self, labels: &[String]) -> Result<Vocabulary> {
        Vocabulary::new(labels.iter().map(|l| self.resolve(l).to_string()))
    }

    /// 全項目の保存ラベルから語彙を作成
    pub fn vocabulary(&self) -> Result<Vocabulary> {
        Vocabulary::new(self.entries.iter().map(|e| e.stored.clone()))
    }

    /// 選択された項目（インデックス）から語彙を作成
    pub fn vocabulary_from_selection(&self, selected: &[usize]) -> Result<Vocabulary> {
        Vocabulary::new(
            selected
                .iter()
                .filter_map(|&i| self.entries.get(i))
                .map(|e| e.stored.clone()),
        )
    }
}

impl Default for StatusCatalog {
    /// 微信・Chromeでの表示確認用の既定カタログ
    fn default() -> Self {
        Self::new(vec![
            CatalogEntry::new("正常-OK", "正常"),
            CatalogEntry::new(
                "无法在微信打开-Không mở được trong wechat",
                "无法在微信打开",
            ),
            CatalogEntry::new(
                "无法在Chrome打开-Không mở được trong chrome",
                "无法在Chrome打开",
            ),
        ])
    }
}
