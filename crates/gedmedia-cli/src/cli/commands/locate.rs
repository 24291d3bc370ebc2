//! `gedmedia locate` – show where a media file resolves to.

use anyhow::Result;
use gedmedia_core::{MediaLocator, MediaRecord, ResolvedLocation, Variant};

pub fn run_locate(
    locator: &MediaLocator,
    file: &str,
    variant: Variant,
    generate: bool,
    json: bool,
) -> Result<()> {
    let record = MediaRecord::new("", file);
    let loc = locator.locate_with(&record, variant, generate);
    if json {
        println!("{}", serde_json::to_string_pretty(&loc)?);
    } else {
        print!("{}", render(&loc));
    }
    Ok(())
}

fn render(loc: &ResolvedLocation) -> String {
    format!(
        "variant:  {}\nexternal: {}\nstate:    {:?}\nserver:   {}\nweb:      {}\n",
        loc.variant.as_str(),
        loc.is_external,
        loc.exists,
        loc.server_path.display(),
        loc.web_path,
    )
}
