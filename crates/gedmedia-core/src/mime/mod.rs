//! MIME type and image size detection.
//!
//! Decodable images are identified from their header bytes; anything else
//! falls back to the filename extension, looked up in the table of types the
//! media firewall knows how to serve.

mod diagnostics;
mod table;

use image::ImageFormat;
use serde::Serialize;
use std::path::Path;

use crate::locator::Variant;

pub use diagnostics::{DiagnosticSink, TracingSink};
pub use table::{mime_for_extension, OCTET_STREAM};

/// Type and dimensions of a media file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MediaInfo {
    /// Upper-case extension, e.g. `"JPG"` or `"PDF"`. Empty when unknown.
    pub ext: String,
    pub mime: String,
    /// Pixel width read from the image header; 0 for non-images.
    pub width: u32,
    pub height: u32,
}

impl MediaInfo {
    pub fn is_image(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Width to render at: thumbnails wider than `max_width` are capped.
    /// `None` for non-images.
    pub fn display_width(&self, variant: Variant, max_width: u32) -> Option<u32> {
        if !self.is_image() {
            return None;
        }
        match variant {
            Variant::Thumb if self.width > max_width => Some(max_width),
            _ => Some(self.width),
        }
    }

    /// Dimensions padded for a popup window around the image.
    pub fn adjusted(&self, add_width: u32, add_height: u32) -> (u32, u32) {
        if !self.is_image() {
            return (0, 0);
        }
        (
            self.width.saturating_add(add_width),
            self.height.saturating_add(add_height),
        )
    }
}

/// Upper-case extension of a filename or URL, ignoring any query string.
pub fn extension_of(filename: &str) -> String {
    let without_query = filename.split('?').next().unwrap_or_default();
    let name = without_query
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(without_query);
    match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => ext.to_uppercase(),
        _ => String::new(),
    }
}

/// Extension reported for an image codec.
fn format_extension(format: ImageFormat) -> String {
    match format {
        ImageFormat::Jpeg => "JPG".to_string(),
        other => other
            .extensions_str()
            .first()
            .map(|e| e.to_uppercase())
            .unwrap_or_default(),
    }
}

/// Reads the codec and dimensions from an image file's header, without
/// decoding pixel data. `None` if the file is not a readable image.
pub fn sniff_image(path: &Path) -> Option<MediaInfo> {
    let reader = image::ImageReader::open(path)
        .ok()?
        .with_guessed_format()
        .ok()?;
    let format = reader.format()?;
    let (width, height) = reader.into_dimensions().ok()?;
    if width == 0 || height == 0 {
        return None;
    }
    Some(MediaInfo {
        ext: format_extension(format),
        mime: format.to_mime_type().to_string(),
        width,
        height,
    })
}

/// Type derived from the filename alone.
pub fn info_from_extension(filename: &str) -> MediaInfo {
    let ext = extension_of(filename);
    let mime = mime_for_extension(&ext).unwrap_or(OCTET_STREAM);
    MediaInfo {
        ext,
        mime: mime.to_string(),
        width: 0,
        height: 0,
    }
}
