//! ステータスファイル（statuses.json）の読み書き
//!
//! フォルダごとに1ファイル。中身はファイル名 → ラベルのフラットなJSON。
//! 保存は常に全体の上書きで、古いキーとのマージはしない。

use crate::error::Result;
use crate::notify::Notifier;
use photo_status_common::{reconcile, StatusRecord, Vocabulary};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

pub const STATUS_FILE_NAME: &str = "statuses.json";

pub fn status_path(folder: &Path) -> PathBuf {
    folder.join(STATUS_FILE_NAME)
}

/// ステータスを読み込み、語彙に合わせて整合する
///
/// - ファイルなし: 空の記録（通知なし）
/// - 読み込み・解析失敗: エラーを1回通知して空の記録
///
/// 呼び出し側にエラーは返さない。
pub fn load(folder: &Path, vocabulary: &Vocabulary, notifier: &dyn Notifier) -> StatusRecord {
    let path = status_path(folder);
    if !path.exists() {
        tracing::debug!(path = %path.display(), "ステータスファイルなし");
        return StatusRecord::new();
    }

    match read_record(&path) {
        Ok(record) => {
            tracing::debug!(path = %path.display(), entries = record.len(), "ステータスを読み込み");
            reconcile(&record, vocabulary)
        }
        Err(e) => {
            notifier.error(&format!("ステータスの読み込みに失敗しました: {}", e));
            StatusRecord::new()
        }
    }
}

/// ステータスを保存（既存ファイルは上書き）
///
/// 結果はnotifierにも通知する。失敗時の再試行はしない。
pub fn save(record: &StatusRecord, folder: &Path, notifier: &dyn Notifier) -> Result<()> {
    let path = status_path(folder);

    match write_record(record, &path) {
        Ok(()) => {
            tracing::debug!(path = %path.display(), entries = record.len(), "ステータスを保存");
            notifier.success("ステータスを保存しました");
            Ok(())
        }
        Err(e) => {
            notifier.error(&format!("ステータスの保存に失敗しました: {}", e));
            Err(e)
        }
    }
}

fn read_record(path: &Path) -> Result<StatusRecord> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let record = serde_json::from_reader(reader)?;
    Ok(record)
}

fn write_record(record: &StatusRecord, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, record)?;
    writer.flush()?;
    Ok(())
}
