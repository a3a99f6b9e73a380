//! ステータス記録の型定義
//!
//! - Vocabulary: セッションで有効なステータスラベル（順序付き・重複なし）
//! - StatusRecord: ファイル名 → ステータスラベルの対応表（statuses.json の中身）

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// 有効なステータスラベルの並び
///
/// 空にはならない。先頭のラベルが既定値として使われる。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    labels: Vec<String>,
}

impl Vocabulary {
    /// ラベル列から作成（重複は最初の出現を残して除去）
    pub fn new<I, S>(labels: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let labels: Vec<String> = labels
            .into_iter()
            .map(Into::into)
            .filter(|label| seen.insert(label.clone()))
            .collect();

        if labels.is_empty() {
            return Err(Error::EmptyVocabulary);
        }

        Ok(Self { labels })
    }

    /// 既定ラベル
    pub fn first(&self) -> &str {
        &self.labels[0]
    }

    pub fn contains(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }

    /// ラベルの位置（選択肢の初期インデックス用）
    pub fn position(&self, label: &str) -> Option<usize> {
        self.labels.iter().position(|l| l == label)
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// 常に false（空の語彙は作成できない）
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// ファイル名 → ステータスラベル
///
/// JSONではフラットなオブジェクト `{ "a.png": "正常" }` として表現する。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatusRecord {
    entries: BTreeMap<String, String>,
}

impl StatusRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// JSON文字列から読み込み
    pub fn from_json(json: &str) -> Result<Self> {
        let record: Self = serde_json::from_str(json)?;
        Ok(record)
    }

    /// 整形済みJSONに変換
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn get(&self, file_name: &str) -> Option<&str> {
        self.entries.get(file_name).map(String::as_str)
    }

    /// ステータスを設定（既存の値は上書き）
    pub fn insert(&mut self, file_name: impl Into<String>, label: impl Into<String>) {
        self.entries.insert(file_name.into(), label.into());
    }

    pub fn remove(&mut self, file_name: &str) -> Option<String> {
        self.entries.remove(file_name)
    }

    pub fn contains(&self, file_name: &str) -> bool {
        self.entries.contains_key(file_name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// (ファイル名, ラベル) をファイル名順に列挙
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for StatusRecord
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocabulary_removes_duplicates() {
        let vocab = Vocabulary::new(["OK", "Blocked", "OK"]).unwrap();
        assert_eq!(vocab.labels(), &["OK".to_string(), "Blocked".to_string()]);
        assert_eq!(vocab.first(), "OK");
    }

    #[test]
    fn test_vocabulary_empty_is_error() {
        let result = Vocabulary::new(Vec::<String>::new());
        assert!(matches!(result, Err(Error::EmptyVocabulary)));
    }

    #[test]
    fn test_vocabulary_position() {
        let vocab = Vocabulary::new(["OK", "Blocked"]).unwrap();
        assert_eq!(vocab.position("Blocked"), Some(1));
        assert_eq!(vocab.position("Unknown"), None);
        assert!(vocab.contains("OK"));
        assert!(!vocab.contains("ok"));
    }

    #[test]
    fn test_record_json_shape() {
        let record: StatusRecord = [("b.png", "NG"), ("a.png", "OK")].into_iter().collect();
        let json = record.to_json_pretty().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert!(value.is_object());
        assert_eq!(value["a.png"], "OK");
        assert_eq!(value["b.png"], "NG");
    }

    #[test]
    fn test_record_from_json_rejects_non_string_values() {
        assert!(StatusRecord::from_json(r#"{"a.png": 1}"#).is_err());
        assert!(StatusRecord::from_json(r#"["a.png"]"#).is_err());
    }

    #[test]
    fn test_record_insert_overwrites() {
        let mut record = StatusRecord::new();
        record.insert("a.png", "OK");
        record.insert("a.png", "NG");
        assert_eq!(record.len(), 1);
        assert_eq!(record.get("a.png"), Some("NG"));
    }
}
