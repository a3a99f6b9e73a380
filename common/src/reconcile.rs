//! ステータスの整合処理
//!
//! 現在の語彙に含まれないラベルを語彙の先頭ラベルに置き換える。
//! 読み込み時に暗黙に行うのではなく、独立したステップとして呼び出す。

use crate::types::{StatusRecord, Vocabulary};

/// 語彙外のラベルを先頭ラベルに置き換えた新しい記録を返す
pub fn reconcile(record: &StatusRecord, vocabulary: &Vocabulary) -> StatusRecord {
    record
        .iter()
        .map(|(file_name, label)| {
            let label = if vocabulary.contains(label) {
                label
            } else {
                vocabulary.first()
            };
            (file_name, label)
        })
        .collect()
}

/// 画像の現在ステータス（未記録または語彙外なら先頭ラベル）
pub fn effective_status<'a>(
    record: &'a StatusRecord,
    file_name: &str,
    vocabulary: &'a Vocabulary,
) -> &'a str {
    match record.get(file_name) {
        Some(label) if vocabulary.contains(label) => label,
        _ => vocabulary.first(),
    }
}
