//! 集計結果のテキスト表示

use photo_status_common::{StatusCatalog, Summary};
use std::fmt::Write;

/// ステータス概要を文字列に整形
///
/// `with_files` が true のときはラベルごとのファイル名一覧も出す。
pub fn render_summary(summary: &Summary, catalog: &StatusCatalog, with_files: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "ステータス概要:");

    for group in summary.groups() {
        let _ = writeln!(
            out,
            "  - {}: {}枚",
            catalog.display_for(&group.label),
            group.count()
        );
    }

    if with_files {
        for group in summary.groups() {
            let _ = writeln!(
                out,
                "\n{} の画像 ({}枚)",
                catalog.display_for(&group.label),
                group.count()
            );
            for file in &group.files {
                let _ = writeln!(out, "    - {}", file);
            }
        }
    }

    out
}
