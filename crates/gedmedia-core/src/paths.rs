//! Mapping media filenames onto the media directories.

use std::path::{Component, Path, PathBuf};

/// Directory (beneath each media root) holding thumbnails.
pub const THUMBS_DIR: &str = "thumbs";

/// Reduces a media filename to the path kept beneath a media root.
///
/// Only normal components survive (no roots, prefixes, `.` or `..`), so the
/// result can never escape the root it is joined to. Of those, the file name
/// and at most `levels` parent directories are kept. A query string on the
/// filename is dropped.
pub fn media_relative_path(filename: &str, levels: usize) -> PathBuf {
    let without_query = filename.split('?').next().unwrap_or_default();
    let normalized = without_query.replace('\\', "/");
    let parts: Vec<_> = Path::new(&normalized)
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_owned()),
            _ => None,
        })
        .collect();

    let keep = levels.saturating_add(1).min(parts.len());
    parts[parts.len() - keep..].iter().collect()
}

/// Relative thumbnail path for a relative media path.
pub fn thumbnail_relative_path(relative: &Path) -> PathBuf {
    Path::new(THUMBS_DIR).join(relative)
}

/// Web path of a relative media path beneath `prefix`, always `/`-separated.
pub fn web_path(prefix: &str, relative: &Path) -> String {
    let mut out = prefix.trim_end_matches('/').to_string();
    for part in relative.components() {
        if let Component::Normal(part) = part {
            if !out.is_empty() {
                out.push('/');
            }
            out.push_str(&part.to_string_lossy());
        }
    }
    out
}
