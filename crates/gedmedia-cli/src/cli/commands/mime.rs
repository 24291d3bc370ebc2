//! `gedmedia mime` – detect MIME type and image size.

use anyhow::Result;
use gedmedia_core::{MediaLocator, MediaRecord, Variant};

pub fn run_mime(locator: &MediaLocator, file: &str, variant: Variant) -> Result<()> {
    let record = MediaRecord::new("", file);
    let info = locator.resolve_mime_type(&record, variant);
    let ext = if info.ext.is_empty() { "-" } else { info.ext.as_str() };
    if info.is_image() {
        let max = locator.config().thumbnail_max_width;
        let shown = info.display_width(variant, max).unwrap_or(info.width);
        println!(
            "{:<6} {:<28} {}x{} (display width {})",
            ext, info.mime, info.width, info.height, shown
        );
    } else {
        println!("{:<6} {}", ext, info.mime);
    }
    Ok(())
}
