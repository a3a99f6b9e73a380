//! 画像のプレビュー準備
//!
//! 画像をデコードして表示サイズ（元の50%）を求める。デコードに失敗した画像は
//! 表示エラーとして扱われ、セッションは次の画像に進む。

use crate::error::{PhotoStatusError, Result};
use crate::scanner::ImageInfo;
use image::ImageReader;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preview {
    pub width: u32,
    pub height: u32,
}

impl Preview {
    /// 表示サイズ（縦横とも半分、最小1px）
    pub fn display_size(&self) -> (u32, u32) {
        ((self.width / 2).max(1), (self.height / 2).max(1))
    }
}

pub trait Previewer {
    fn preview(&self, image: &ImageInfo) -> Result<Preview>;
}

/// `image` クレートで実際にデコードする
#[derive(Debug, Default, Clone, Copy)]
pub struct DecodePreviewer;

impl Previewer for DecodePreviewer {
    fn preview(&self, image: &ImageInfo) -> Result<Preview> {
        let decoded = ImageReader::open(&image.path)?
            .with_guessed_format()?
            .decode()
            .map_err(|e| PhotoStatusError::ImageLoad(format!("{}: {}", image.file_name, e)))?;

        Ok(Preview {
            width: decoded.width(),
            height: decoded.height(),
        })
    }
}
