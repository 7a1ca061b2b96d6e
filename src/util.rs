//! Small helpers shared by the model and the generators.

use std::path::Path;

use chrono::{Local, NaiveDate};

/// Map an image filename to its media type.
///
/// The table is closed: anything other than PNG, JPEG, GIF, TIFF and SVG
/// yields `None` and is left out of the package manifest.
pub fn image_media_type(filename: &str) -> Option<&'static str> {
    let ext = Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "tif" | "tiff" => Some("image/tiff"),
        "svg" => Some("image/svg+xml"),
        _ => None,
    }
}

/// Final component of a path, accepting both `/` and `\` separators.
pub fn basename(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

/// Clean a caller-supplied section filename.
///
/// Returns `None` when nothing usable is left, in which case the caller
/// falls back to the positional `s<N>` name.
pub fn sanitize_filename(name: &str) -> Option<String> {
    let trimmed = name.trim();
    let stem = trimmed.strip_suffix(".xhtml").unwrap_or(trimmed);
    if stem.is_empty() {
        return None;
    }
    Some(
        stem.chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                    c
                } else {
                    '_'
                }
            })
            .collect(),
    )
}

/// Today's local date, used for the generation-time modification stamp.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
