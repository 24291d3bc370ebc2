//! Thumbnail generation.
//!
//! The locator asks a [`ThumbnailGenerator`] for a thumbnail only when none
//! exists yet. Generators never fail outward: when a thumbnail cannot be
//! produced they hand back the placeholder, which always exists on disk.

mod generator;
mod placeholder;

use std::path::{Path, PathBuf};

pub use generator::ImageThumbnailGenerator;
pub use placeholder::{ensure_placeholder, PLACEHOLDER_FILE};

pub trait ThumbnailGenerator: Send + Sync {
    /// Writes a thumbnail of `source` to `target` and returns the thumbnail's
    /// path, or the placeholder path if that is not possible. Blocking.
    fn generate(&self, source: &Path, target: &Path) -> PathBuf;

    /// Path of an existing placeholder image.
    fn placeholder(&self) -> PathBuf;
}

/// Whether the file extension names an image format the generator will try to decode.
pub fn can_thumbnail(path: &Path) -> bool {
    image::ImageFormat::from_path(path).is_ok()
}
