use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// 撮影日時を取得（DateTimeOriginal → DateTime の順）
///
/// スクリーンショット等EXIFを持たない画像では None。
pub fn capture_date(path: &Path) -> Option<String> {
    let file = File::open(path).ok()?;
    let mut reader = BufReader::new(file);
    let exif = match exif::Reader::new().read_from_container(&mut reader) {
        Ok(exif) => exif,
        Err(e) => {
            tracing::trace!(path = %path.display(), error = %e, "EXIFなし");
            return None;
        }
    };

    [exif::Tag::DateTimeOriginal, exif::Tag::DateTime]
        .into_iter()
        .find_map(|tag| exif.get_field(tag, exif::In::PRIMARY))
        .map(|field| field.display_value().to_string())
}
