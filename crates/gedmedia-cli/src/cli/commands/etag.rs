//! `gedmedia etag` – print the cache-busting etag for a viewer.

use anyhow::Result;
use gedmedia_core::MediaLocator;

use crate::cli::Target;

pub fn run_etag(locator: &MediaLocator, target: &Target) -> Result<()> {
    let record = target.record();
    let etag = locator.compute_etag(&record, target.variant(), &target.access());
    if etag.is_empty() {
        println!("(none: external media)");
    } else {
        println!("{etag}");
    }
    Ok(())
}
