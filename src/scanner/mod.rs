mod exif;

use crate::error::{PhotoStatusError, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone)]
pub struct ImageInfo {
    pub path: PathBuf,
    pub file_name: String,
    /// EXIFの撮影日時（表示用）
    pub date: Option<String>,
}

impl ImageInfo {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        Self {
            path,
            file_name,
            date: None,
        }
    }
}

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

fn is_image_extension(ext: &str) -> bool {
    IMAGE_EXTENSIONS.iter().any(|e| e.eq_ignore_ascii_case(ext))
}

/// フォルダ直下の画像を列挙（再帰しない）
///
/// 表示順を安定させるためファイル名でソートするが、呼び出し側は順序に依存しないこと。
pub fn list_images(folder: &Path) -> Result<Vec<ImageInfo>> {
    if !folder.is_dir() {
        return Err(PhotoStatusError::FolderNotFound(folder.display().to_string()));
    }

    let mut images = Vec::new();

    for entry in WalkDir::new(folder)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        let is_image = path
            .extension()
            .map(|ext| is_image_extension(&ext.to_string_lossy()))
            .unwrap_or(false);

        if is_image {
            let mut info = ImageInfo::new(path);
            info.date = exif::capture_date(path);
            images.push(info);
        }
    }

    images.sort_by(|a, b| a.file_name.cmp(&b.file_name));
    tracing::debug!(folder = %folder.display(), count = images.len(), "画像を列挙");

    Ok(images)
}
