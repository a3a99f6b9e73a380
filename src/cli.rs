use crate::error::Result;
use crate::folder;
use crate::session::DisplayFailurePolicy;
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "photo-status")]
#[command(about = "日付フォルダの画像にステータスを付けて記録するレビューツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// 対象フォルダの指定（日付 or パス）
#[derive(Args, Debug, Clone, Default)]
pub struct FolderArgs {
    /// 対象日（YYYYMMDD / YYYY-MM-DD、省略時は今日）
    #[arg(short, long, conflicts_with = "folder")]
    pub date: Option<String>,

    /// フォルダを直接指定
    #[arg(short, long)]
    pub folder: Option<PathBuf>,

    /// 日付フォルダの親ディレクトリ（設定の root_dir より優先）
    #[arg(long)]
    pub root: Option<PathBuf>,
}

impl FolderArgs {
    /// 対象フォルダのパスを決める（存在確認はしない）
    pub fn resolve(&self, config_root: &Path) -> Result<PathBuf> {
        if let Some(folder) = &self.folder {
            return Ok(folder.clone());
        }

        let date = match &self.date {
            Some(input) => folder::parse_date(input)?,
            None => folder::today(),
        };
        let root = self.root.as_deref().unwrap_or(config_root);
        Ok(folder::resolve_folder(root, date))
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// 画像ごとにステータスを選んで保存
    Review {
        #[command(flatten)]
        target: FolderArgs,

        /// 使用するステータス（複数指定可、省略時は対話選択）
        #[arg(short, long = "status")]
        statuses: Vec<String>,

        /// 画像を表示できないときの扱い（設定より優先）
        #[arg(long)]
        on_display_error: Option<DisplayFailurePolicy>,
    },

    /// ステータスごとの件数を表示
    Summary {
        #[command(flatten)]
        target: FolderArgs,

        /// 使用するステータス（省略時はカタログ全体）
        #[arg(short, long = "status")]
        statuses: Vec<String>,

        /// ステータスごとのファイル名も表示
        #[arg(short, long)]
        list: bool,
    },

    /// フォルダ内の画像を一覧表示
    List {
        #[command(flatten)]
        target: FolderArgs,
    },

    /// 設定を表示/編集
    Config {
        /// 設定を表示
        #[arg(long)]
        show: bool,

        /// 日付フォルダの親ディレクトリを設定
        #[arg(long)]
        set_root: Option<PathBuf>,

        /// 画像を表示できないときの扱いを設定
        #[arg(long)]
        set_on_display_error: Option<DisplayFailurePolicy>,
    },
}
