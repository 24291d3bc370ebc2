//! On-disk media tree fixture: an unprotected and a protected media root
//! populated with a few files, plus a matching locator config.

use gedmedia_core::config::MediaLocatorConfig;
use image::{ImageBuffer, Rgb};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

pub struct MediaTree {
    pub _dir: TempDir,
    pub config: MediaLocatorConfig,
}

fn write(path: &Path, bytes: &[u8]) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, bytes).unwrap();
}

fn write_png(path: &Path, w: u32, h: u32) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    ImageBuffer::from_pixel(w, h, Rgb([120u8, 110, 100]))
        .save(path)
        .unwrap();
}

/// Layout (levels = 1):
/// - media/family/reunion.png          (public photo, 300x150)
/// - firewall/living/baby.png          (protected photo, 64x64)
/// - firewall/deeds/1890.pdf           (protected document)
pub fn start() -> MediaTree {
    let dir = tempfile::tempdir().unwrap();
    let config = MediaLocatorConfig {
        unprotected_root: dir.path().join("media"),
        protected_root: dir.path().join("firewall"),
        thumbnail_max_width: 100,
        suppress_watermark: false,
        media_directory_levels: 1,
        thumbnail_cache_dir: Some(dir.path().join("cache")),
        ..MediaLocatorConfig::default()
    };
    write_png(&config.unprotected_root.join("family/reunion.png"), 300, 150);
    write_png(&config.protected_root.join("living/baby.png"), 64, 64);
    write(
        &config.protected_root.join("deeds/1890.pdf"),
        b"%PDF-1.4 land deed",
    );
    MediaTree { _dir: dir, config }
}
