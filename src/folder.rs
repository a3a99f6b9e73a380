//! 日付フォルダの解決
//!
//! 画像は `<root>/YYYYMMDD/` に置かれる。

use crate::error::{PhotoStatusError, Result};
use chrono::{Local, NaiveDate};
use std::path::{Path, PathBuf};

const FOLDER_DATE_FORMAT: &str = "%Y%m%d";

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// `YYYYMMDD` または `YYYY-MM-DD` を解釈
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    let trimmed = input.trim();
    NaiveDate::parse_from_str(trimmed, FOLDER_DATE_FORMAT)
        .or_else(|_| NaiveDate::parse_from_str(trimmed, "%Y-%m-%d"))
        .map_err(|_| PhotoStatusError::InvalidDate(input.to_string()))
}

pub fn folder_name(date: NaiveDate) -> String {
    date.format(FOLDER_DATE_FORMAT).to_string()
}

pub fn resolve_folder(root: &Path, date: NaiveDate) -> PathBuf {
    root.join(folder_name(date))
}
