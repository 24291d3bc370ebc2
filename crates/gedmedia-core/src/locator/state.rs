//! Resolution result types.

use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use std::time::UNIX_EPOCH;

/// Which file of a media record is being resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Main,
    Thumb,
}

impl Variant {
    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Main => "main",
            Variant::Thumb => "thumb",
        }
    }
}

/// Where (if anywhere) a local media file was found.
///
/// Ordered `NotFound < FoundUnprotected < FoundProtected`; callers should rely
/// on the variants and that ordering only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExistsState {
    NotFound,
    FoundUnprotected,
    FoundProtected,
}

impl ExistsState {
    pub fn is_found(self) -> bool {
        !matches!(self, ExistsState::NotFound)
    }
}

/// Outcome of resolving one variant of a media record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedLocation {
    pub variant: Variant,
    pub exists: ExistsState,
    /// Path the bytes are read from (or the URL, for external media).
    pub server_path: PathBuf,
    /// Path relative to the web root, used for links. Never a filesystem
    /// path; the URL itself for external media.
    pub web_path: String,
    pub is_external: bool,
}

impl ResolvedLocation {
    pub(crate) fn external(variant: Variant, filename: &str) -> Self {
        Self {
            variant,
            exists: ExistsState::NotFound,
            server_path: PathBuf::from(filename),
            web_path: filename.to_string(),
            is_external: true,
        }
    }

    fn readable(&self) -> bool {
        !self.is_external && self.exists.is_found()
    }

    /// File size in bytes; 0 when missing, external or unreadable.
    pub fn size_in_bytes(&self) -> u64 {
        if !self.readable() {
            return 0;
        }
        fs::metadata(&self.server_path)
            .map(|m| m.len())
            .unwrap_or(0)
    }

    /// Modification time in seconds since the Unix epoch; 0 on any failure.
    pub fn modified_time(&self) -> i64 {
        if !self.readable() {
            return 0;
        }
        fs::metadata(&self.server_path)
            .and_then(|m| m.modified())
            .ok()
            .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
            .and_then(|d| i64::try_from(d.as_secs()).ok())
            .unwrap_or(0)
    }

    /// Size as shown next to a media item, e.g. `12.50 KB`.
    pub fn size_label(&self) -> String {
        format_size_kb(self.size_in_bytes())
    }

    /// Final path component of `server_path`.
    pub fn basename(&self) -> String {
        self.server_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Formats a byte count in kilobytes with two decimals.
pub fn format_size_kb(bytes: u64) -> String {
    format!("{:.2} KB", bytes as f64 / 1024.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exists_state_ordering() {
        assert!(ExistsState::NotFound < ExistsState::FoundUnprotected);
        assert!(ExistsState::FoundUnprotected < ExistsState::FoundProtected);
        assert!(!ExistsState::NotFound.is_found());
        assert!(ExistsState::FoundProtected.is_found());
    }

    #[test]
    fn external_has_no_size_or_time() {
        let loc = ResolvedLocation::external(Variant::Main, "http://example.com/a.jpg");
        assert!(loc.is_external);
        assert_eq!(loc.exists, ExistsState::NotFound);
        assert_eq!(loc.size_in_bytes(), 0);
        assert_eq!(loc.modified_time(), 0);
        assert_eq!(loc.basename(), "a.jpg");
        assert_eq!(loc.web_path, "http://example.com/a.jpg");
    }

    #[test]
    fn sizes_in_kilobytes() {
        assert_eq!(format_size_kb(0), "0.00 KB");
        assert_eq!(format_size_kb(12_800), "12.50 KB");
        assert_eq!(format_size_kb(1_048_576), "1024.00 KB");
    }

    #[test]
    fn found_file_metadata() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.txt");
        fs::write(&path, b"12345").unwrap();
        let loc = ResolvedLocation {
            variant: Variant::Main,
            exists: ExistsState::FoundUnprotected,
            server_path: path,
            web_path: "media/a.txt".to_string(),
            is_external: false,
        };
        assert_eq!(loc.size_in_bytes(), 5);
        assert!(loc.modified_time() > 0);
        assert_eq!(loc.size_label(), "0.00 KB");
    }

    #[test]
    fn vanished_file_degrades_to_zero() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gone.txt");
        let loc = ResolvedLocation {
            variant: Variant::Main,
            exists: ExistsState::FoundProtected,
            server_path: path,
            web_path: "media/gone.txt".to_string(),
            is_external: false,
        };
        assert_eq!(loc.size_in_bytes(), 0);
        assert_eq!(loc.modified_time(), 0);
    }
}
