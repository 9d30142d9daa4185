use std::path::{Path, PathBuf};

/// Derive an export destination next to the media file:
/// `{stem}_{suffix}.{extension}`.
pub(crate) fn with_language_suffix(media_path: &Path, suffix: &str, extension: &str) -> PathBuf {
    let stem = media_path.file_stem().unwrap_or_default().to_string_lossy();
    media_path.with_file_name(format!("{stem}_{suffix}.{extension}"))
}
