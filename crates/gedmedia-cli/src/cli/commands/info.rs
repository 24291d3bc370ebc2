//! `gedmedia info` – summarize a media file.

use anyhow::Result;
use gedmedia_core::kind::classify;
use gedmedia_core::{MediaLocator, MediaRecord, Variant};

pub fn run_info(locator: &MediaLocator, file: &str) -> Result<()> {
    let record = MediaRecord::new("", file);
    let external = locator.is_external(&record);
    let class = classify(file, external);
    let loc = locator.locate_with(&record, Variant::Main, false);

    println!("name:     {}", record.fallback_name());
    println!("kind:     {}", class.tag());
    println!("state:    {:?}", loc.exists);
    if !external {
        println!("size:     {} bytes ({})", loc.size_in_bytes(), loc.size_label());
        println!("modified: {}", loc.modified_time());
    }
    Ok(())
}
