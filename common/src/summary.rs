//! ステータス集計
//!
//! 語彙の各ラベルについて件数とファイル名一覧を求める。
//! 記録は変更しない（語彙外のラベルは数えない）。

use crate::types::{StatusRecord, Vocabulary};

/// ラベルごとのグループ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusGroup {
    pub label: String,
    /// ファイル名（昇順）
    pub files: Vec<String>,
}

impl StatusGroup {
    pub fn count(&self) -> usize {
        self.files.len()
    }
}

/// 集計結果（語彙の順序を保つ）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    groups: Vec<StatusGroup>,
}

impl Summary {
    pub fn groups(&self) -> &[StatusGroup] {
        &self.groups
    }

    /// ラベルの件数（語彙外なら0）
    pub fn count(&self, label: &str) -> usize {
        self.group(label).map(StatusGroup::count).unwrap_or(0)
    }

    /// ラベルが付いたファイル名一覧
    pub fn files(&self, label: &str) -> &[String] {
        self.group(label).map(|g| g.files.as_slice()).unwrap_or(&[])
    }

    /// 集計対象になった件数の合計
    pub fn total(&self) -> usize {
        self.groups.iter().map(StatusGroup::count).sum()
    }

    /// (ラベル, 件数) の一覧
    pub fn counts(&self) -> Vec<(&str, usize)> {
        self.groups
            .iter()
            .map(|g| (g.label.as_str(), g.count()))
            .collect()
    }

    fn group(&self, label: &str) -> Option<&StatusGroup> {
        self.groups.iter().find(|g| g.label == label)
    }
}

pub fn summarize(record: &StatusRecord, vocabulary: &Vocabulary) -> Summary {
    let groups = vocabulary
        .iter()
        .map(|label| StatusGroup {
            label: label.to_string(),
            files: record
                .iter()
                .filter(|(_, status)| *status == label)
                .map(|(file_name, _)| file_name.to_string())
                .collect(),
        })
        .collect();

    Summary { groups }
}
