//! photo-status
//!
//! 日付フォルダ（YYYYMMDD）内の画像にステータスを付け、
//! フォルダごとの statuses.json に記録する。

pub mod cli;
pub mod config;
pub mod error;
pub mod folder;
pub mod notify;
pub mod preview;
pub mod report;
pub mod scanner;
pub mod session;
pub mod store;

pub use photo_status_common::{StatusCatalog, StatusRecord, Summary, Vocabulary};
