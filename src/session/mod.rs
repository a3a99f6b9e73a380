//! レビューセッション
//!
//! 画像一覧・前回の記録・語彙を受け取り、画像ごとにプロンプトで選択させて
//! 新しい記録を組み立てる。保存はループ終了後に1回だけ行う。
//!
//! ## 変更履歴
//! - 2026-10-16: 表示失敗時の扱いを設定可能に（keep-prior / drop）

mod prompt;

pub use prompt::{select_vocabulary, DialoguerPrompter};

use crate::error::{PhotoStatusError, Result};
use crate::notify::Notifier;
use crate::preview::{Preview, Previewer};
use crate::scanner::{self, ImageInfo};
use crate::store;
use photo_status_common::{effective_status, StatusRecord, Vocabulary};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 画像を表示できなかったときの扱い
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum DisplayFailurePolicy {
    /// 前回のステータスがあれば引き継ぐ
    #[default]
    KeepPrior,
    /// 今回の記録から外す
    Drop,
}

impl std::fmt::Display for DisplayFailurePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DisplayFailurePolicy::KeepPrior => write!(f, "keep-prior"),
            DisplayFailurePolicy::Drop => write!(f, "drop"),
        }
    }
}

/// プロンプトに渡す1画像分の情報
pub struct PromptRequest<'a> {
    pub image: &'a ImageInfo,
    pub preview: Preview,
    pub options: &'a Vocabulary,
    /// 初期選択（options内のインデックス）
    pub default: usize,
    /// 何枚目か（1始まり）
    pub position: usize,
    pub total: usize,
}

/// プロンプトの応答
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// options内のインデックス
    Selected(usize),
    /// 保存せずに終了
    Abandon,
}

/// 単一選択のプロンプト
pub trait Prompter {
    fn choose(&mut self, request: &PromptRequest<'_>) -> Result<Selection>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// 全画像を処理した。この記録で上書き保存する
    Completed(StatusRecord),
    /// 途中で中断した。何も保存しない
    Abandoned { reviewed: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewReport {
    pub outcome: SessionOutcome,
    pub saved: bool,
}

pub struct SessionRunner<'a> {
    vocabulary: &'a Vocabulary,
    previewer: &'a dyn Previewer,
    notifier: &'a dyn Notifier,
    policy: DisplayFailurePolicy,
}

impl<'a> SessionRunner<'a> {
    pub fn new(
        vocabulary: &'a Vocabulary,
        previewer: &'a dyn Previewer,
        notifier: &'a dyn Notifier,
    ) -> Self {
        Self {
            vocabulary,
            previewer,
            notifier,
            policy: DisplayFailurePolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: DisplayFailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// 画像ごとに選択させ、新しい記録を作る
    ///
    /// `prior` は変更しない。結果の記録には今回処理した画像だけが入る。
    pub fn run(
        &self,
        images: &[ImageInfo],
        prior: &StatusRecord,
        prompter: &mut dyn Prompter,
    ) -> Result<SessionOutcome> {
        let mut record = StatusRecord::new();
        let total = images.len();

        for (idx, image) in images.iter().enumerate() {
            let preview = match self.previewer.preview(image) {
                Ok(preview) => preview,
                Err(e) => {
                    self.notifier
                        .error(&format!("画像を表示できません {}: {}", image.file_name, e));
                    self.apply_display_failure(image, prior, &mut record);
                    continue;
                }
            };

            let current = effective_status(prior, &image.file_name, self.vocabulary);
            let default = self.vocabulary.position(current).unwrap_or(0);

            let request = PromptRequest {
                image,
                preview,
                options: self.vocabulary,
                default,
                position: idx + 1,
                total,
            };

            match prompter.choose(&request)? {
                Selection::Selected(choice) => {
                    let label = self.vocabulary.labels().get(choice).ok_or_else(|| {
                        PhotoStatusError::Prompt(format!("選択肢の範囲外です: {}", choice))
                    })?;
                    tracing::debug!(file = %image.file_name, status = %label, "ステータスを選択");
                    record.insert(image.file_name.clone(), label.clone());
                }
                Selection::Abandon => {
                    tracing::info!(reviewed = idx, total, "セッションを中断");
                    return Ok(SessionOutcome::Abandoned { reviewed: idx });
                }
            }
        }

        Ok(SessionOutcome::Completed(record))
    }

    /// フォルダ1つ分のレビュー（列挙 → 読み込み → 選択 → 保存）
    pub fn review_folder(&self, folder: &Path, prompter: &mut dyn Prompter) -> Result<ReviewReport> {
        let images = scanner::list_images(folder)?;
        let prior = store::load(folder, self.vocabulary, self.notifier);

        let outcome = self.run(&images, &prior, prompter)?;
        let saved = match &outcome {
            SessionOutcome::Completed(record) => store::save(record, folder, self.notifier).is_ok(),
            SessionOutcome::Abandoned { .. } => false,
        };

        Ok(ReviewReport { outcome, saved })
    }

    fn apply_display_failure(&self, image: &ImageInfo, prior: &StatusRecord, record: &mut StatusRecord) {
        match self.policy {
            DisplayFailurePolicy::KeepPrior => {
                if prior.contains(&image.file_name) {
                    let label = effective_status(prior, &image.file_name, self.vocabulary);
                    record.insert(image.file_name.clone(), label);
                }
            }
            DisplayFailurePolicy::Drop => {
                tracing::debug!(file = %image.file_name, "表示失敗のため記録から除外");
            }
        }
    }
}
