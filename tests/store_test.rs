//! ステータスファイルの読み書きテスト
//!
//! statuses.json の読み込み・整合・保存の動作を検証

use photo_status::notify::RecordingNotifier;
use photo_status::store::{self, STATUS_FILE_NAME};
use photo_status_common::{summarize, StatusRecord, Vocabulary};
use tempfile::tempdir;

fn vocab() -> Vocabulary {
    Vocabulary::new(["OK", "Blocked"]).expect("語彙の作成に失敗")
}

/// ファイルがない場合は空（エラー通知なし）
#[test]
fn test_load_missing_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let notifier = RecordingNotifier::new();

    let record = store::load(dir.path(), &vocab(), &notifier);

    assert!(record.is_empty());
    assert!(notifier.notices().is_empty());
}

/// 破損したファイルは空として扱い、エラーを1回だけ通知
#[test]
fn test_load_corrupted_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    std::fs::write(dir.path().join(STATUS_FILE_NAME), "{ invalid json }").unwrap();
    let notifier = RecordingNotifier::new();

    let record = store::load(dir.path(), &vocab(), &notifier);

    assert!(record.is_empty());
    assert_eq!(notifier.errors().len(), 1);
    assert!(notifier.successes().is_empty());
}

/// 文字列以外の値を含むファイルも破損扱い
#[test]
fn test_load_wrong_shape() {
    let dir = tempdir().expect("Failed to create temp dir");
    std::fs::write(dir.path().join(STATUS_FILE_NAME), r#"{"a.png": ["OK"]}"#).unwrap();
    let notifier = RecordingNotifier::new();

    let record = store::load(dir.path(), &vocab(), &notifier);

    assert!(record.is_empty());
    assert_eq!(notifier.errors().len(), 1);
}

/// 語彙外のラベルは先頭ラベルに置き換わる
#[test]
fn test_load_normalizes_unknown_labels() {
    let dir = tempdir().expect("Failed to create temp dir");
    std::fs::write(
        dir.path().join(STATUS_FILE_NAME),
        r#"{"a.png": "Blocked", "b.png": "Unknown"}"#,
    )
    .unwrap();
    let notifier = RecordingNotifier::new();
    let vocabulary = vocab();

    let record = store::load(dir.path(), &vocabulary, &notifier);

    assert_eq!(record.get("a.png"), Some("Blocked"));
    assert_eq!(record.get("b.png"), Some("OK"));
    assert!(notifier.notices().is_empty());

    let summary = summarize(&record, &vocabulary);
    assert_eq!(summary.counts(), vec![("OK", 1), ("Blocked", 1)]);
}

/// 保存と読み込み
#[test]
fn test_save_and_load() {
    let dir = tempdir().expect("Failed to create temp dir");
    let notifier = RecordingNotifier::new();
    let record: StatusRecord = [("x.jpg", "Blocked"), ("y.png", "OK"), ("z.png", "Stale")]
        .into_iter()
        .collect();

    store::save(&record, dir.path(), &notifier).expect("保存失敗");
    assert_eq!(notifier.successes().len(), 1);

    let loaded = store::load(dir.path(), &vocab(), &notifier);
    assert_eq!(loaded.len(), 3);
    assert_eq!(loaded.get("x.jpg"), Some("Blocked"));
    assert_eq!(loaded.get("y.png"), Some("OK"));
    // 語彙外の値だけ先頭ラベルになる
    assert_eq!(loaded.get("z.png"), Some("OK"));
}

/// 空の記録の保存と読み込み
#[test]
fn test_save_empty_record() {
    let dir = tempdir().expect("Failed to create temp dir");
    let notifier = RecordingNotifier::new();

    store::save(&StatusRecord::new(), dir.path(), &notifier).expect("保存失敗");

    let content = std::fs::read_to_string(dir.path().join(STATUS_FILE_NAME)).unwrap();
    assert_eq!(content.trim(), "{}");

    let other = Vocabulary::new(["Anything"]).unwrap();
    assert!(store::load(dir.path(), &other, &notifier).is_empty());
}

/// 保存は常に全体の上書き
#[test]
fn test_save_overwrites_whole_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let notifier = RecordingNotifier::new();

    let first: StatusRecord = [("old.png", "Blocked"), ("keep.png", "Blocked")]
        .into_iter()
        .collect();
    store::save(&first, dir.path(), &notifier).unwrap();

    let second: StatusRecord = [("keep.png", "OK")].into_iter().collect();
    store::save(&second, dir.path(), &notifier).unwrap();

    let loaded = store::load(dir.path(), &vocab(), &notifier);
    assert_eq!(loaded, second);
}

/// 保存ファイルはフラットな文字列オブジェクト
#[test]
fn test_saved_file_shape() {
    let dir = tempdir().expect("Failed to create temp dir");
    let notifier = RecordingNotifier::new();
    let record: StatusRecord = [("画像.png", "正常")].into_iter().collect();

    store::save(&record, dir.path(), &notifier).unwrap();

    let content = std::fs::read_to_string(dir.path().join(STATUS_FILE_NAME)).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(value, serde_json::json!({ "画像.png": "正常" }));
}
