//! Classification of media by how it would be embedded in a page.

use serde::Serialize;

use crate::mime::extension_of;
use crate::url_model::is_street_view;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    FlashVideo,
    WindowsVideo,
    Audio,
    Image,
    Pdf,
    Page,
    StreetView,
    Other,
}

impl MediaKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MediaKind::FlashVideo => "flv",
            MediaKind::WindowsVideo => "wmv",
            MediaKind::Audio => "audio",
            MediaKind::Image => "image",
            MediaKind::Pdf => "pdf",
            MediaKind::Page => "page",
            MediaKind::StreetView => "streetview",
            MediaKind::Other => "other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct MediaClass {
    pub kind: MediaKind,
    pub external: bool,
}

impl MediaClass {
    /// Tag such as `url_image` or `local_pdf`.
    pub fn tag(&self) -> String {
        let origin = if self.external { "url" } else { "local" };
        format!("{origin}_{}", self.kind.as_str())
    }
}

/// Classifies a media filename. `external` comes from the locator's URL
/// detector so both agree on what is external.
pub fn classify(filename: &str, external: bool) -> MediaClass {
    if external && is_street_view(filename) {
        return MediaClass {
            kind: MediaKind::StreetView,
            external,
        };
    }
    let ext = extension_of(filename).to_ascii_lowercase();
    let kind = match ext.as_str() {
        "flv" => MediaKind::FlashVideo,
        "wmv" | "asf" => MediaKind::WindowsVideo,
        "mp3" | "wav" | "wma" | "ogg" | "m4a" => MediaKind::Audio,
        "jpg" | "jpeg" | "gif" | "png" | "bmp" | "tif" | "tiff" | "webp" => MediaKind::Image,
        "pdf" => MediaKind::Pdf,
        "htm" | "html" | "shtml" | "php" | "asp" | "aspx" => MediaKind::Page,
        "" if external => MediaKind::Page,
        _ => MediaKind::Other,
    };
    MediaClass { kind, external }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_kinds() {
        assert_eq!(classify("a/b.JPG", false).kind, MediaKind::Image);
        assert_eq!(classify("clip.flv", false).kind, MediaKind::FlashVideo);
        assert_eq!(classify("clip.wmv", false).kind, MediaKind::WindowsVideo);
        assert_eq!(classify("song.mp3", false).kind, MediaKind::Audio);
        assert_eq!(classify("will.pdf", false).kind, MediaKind::Pdf);
        assert_eq!(classify("notes.doc", false).kind, MediaKind::Other);
        assert_eq!(classify("noext", false).kind, MediaKind::Other);
    }

    #[test]
    fn external_kinds() {
        assert_eq!(
            classify("http://maps.google.com/?ll=1,2", true).kind,
            MediaKind::StreetView
        );
        assert_eq!(classify("http://example.com/", true).kind, MediaKind::Page);
        assert_eq!(
            classify("http://example.com/index.html?x=1", true).kind,
            MediaKind::Page
        );
        assert_eq!(classify("https://cdn.example.com/x.png", true).kind, MediaKind::Image);
    }

    #[test]
    fn street_view_requires_external() {
        assert_eq!(
            classify("http://maps.google.com/a.jpg", false).kind,
            MediaKind::Image
        );
    }

    #[test]
    fn tags() {
        assert_eq!(classify("a.png", false).tag(), "local_image");
        assert_eq!(classify("http://x.org/a.pdf", true).tag(), "url_pdf");
    }
}
