//! `gedmedia url` – build the URL a viewer should use.

use anyhow::Result;
use gedmedia_core::{MediaLocator, UrlContext};

use crate::cli::Target;

pub fn run_url(locator: &MediaLocator, target: &Target, download: bool, raw: bool) -> Result<()> {
    let context = if raw { UrlContext::Raw } else { UrlContext::Html };
    let url = locator.build_access_url(
        &target.record(),
        target.variant(),
        download,
        &target.access(),
        context,
    );
    println!("{url}");
    Ok(())
}
