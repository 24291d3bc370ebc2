//! Thumbnail generator backed by the `image` crate.

use image::imageops::FilterType;
use std::fs;
use std::path::{Path, PathBuf};

use super::placeholder::ensure_placeholder;
use super::{can_thumbnail, ThumbnailGenerator};
use crate::error::{MediaError, MediaResult};

/// Scales images down to a maximum width, keeping the aspect ratio.
#[derive(Debug, Clone)]
pub struct ImageThumbnailGenerator {
    max_width: u32,
    cache_dir: PathBuf,
}

impl ImageThumbnailGenerator {
    pub fn new(max_width: u32, cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            max_width: max_width.max(1),
            cache_dir: cache_dir.into(),
        }
    }

    fn try_generate(&self, source: &Path, target: &Path) -> MediaResult<()> {
        let img = image::open(source).map_err(|e| MediaError::image(source, e))?;
        let thumb = if img.width() > self.max_width {
            let height = scaled_height(img.width(), img.height(), self.max_width);
            img.resize_exact(self.max_width, height, FilterType::Triangle)
        } else {
            img
        };

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(|e| MediaError::io(parent, e))?;
        }
        thumb.save(target).map_err(|e| MediaError::image(target, e))?;
        Ok(())
    }
}

fn scaled_height(width: u32, height: u32, max_width: u32) -> u32 {
    let scaled = u64::from(height) * u64::from(max_width) / u64::from(width.max(1));
    u32::try_from(scaled).unwrap_or(u32::MAX).max(1)
}

impl ThumbnailGenerator for ImageThumbnailGenerator {
    fn generate(&self, source: &Path, target: &Path) -> PathBuf {
        if !can_thumbnail(source) {
            tracing::debug!("no thumbnail for non-image {}", source.display());
            return self.placeholder();
        }
        match self.try_generate(source, target) {
            Ok(()) => {
                tracing::debug!(
                    "generated thumbnail {} from {}",
                    target.display(),
                    source.display()
                );
                target.to_path_buf()
            }
            Err(e) => {
                tracing::debug!("thumbnail generation failed: {e}");
                self.placeholder()
            }
        }
    }

    fn placeholder(&self) -> PathBuf {
        match ensure_placeholder(&self.cache_dir) {
            Ok(path) => path,
            Err(e) => {
                tracing::warn!("cannot write placeholder: {e}");
                let fallback = std::env::temp_dir().join("gedmedia");
                ensure_placeholder(&fallback)
                    .unwrap_or_else(|_| fallback.join(super::PLACEHOLDER_FILE))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgb};

    fn write_png(path: &Path, w: u32, h: u32) {
        let img = ImageBuffer::from_pixel(w, h, Rgb([10u8, 20, 30]));
        img.save(path).unwrap();
    }

    #[test]
    fn scaled_height_keeps_aspect() {
        assert_eq!(scaled_height(400, 200, 100), 50);
        assert_eq!(scaled_height(1000, 1, 100), 1);
    }

    #[test]
    fn generates_scaled_thumbnail() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("big.png");
        write_png(&src, 400, 200);
        let target = dir.path().join("thumbs/nested/big.png");

        let gen = ImageThumbnailGenerator::new(100, dir.path().join("cache"));
        let out = gen.generate(&src, &target);
        assert_eq!(out, target);
        assert_eq!(image::image_dimensions(&out).unwrap(), (100, 50));
    }

    #[test]
    fn small_images_are_copied_at_size() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("small.png");
        write_png(&src, 40, 30);
        let target = dir.path().join("t/small.png");
        let gen = ImageThumbnailGenerator::new(100, dir.path().join("cache"));
        let out = gen.generate(&src, &target);
        assert_eq!(image::image_dimensions(&out).unwrap(), (40, 30));
    }

    #[test]
    fn corrupt_image_falls_back_to_placeholder() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("broken.jpg");
        fs::write(&src, b"definitely not a jpeg").unwrap();
        let gen = ImageThumbnailGenerator::new(100, dir.path().join("cache"));
        let out = gen.generate(&src, &dir.path().join("t/broken.jpg"));
        assert_eq!(out, gen.placeholder());
        assert!(out.is_file());
    }

    #[test]
    fn non_image_falls_back_to_placeholder() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("notes.pdf");
        fs::write(&src, b"%PDF-1.4").unwrap();
        let gen = ImageThumbnailGenerator::new(100, dir.path().join("cache"));
        let out = gen.generate(&src, &dir.path().join("t/notes.pdf"));
        assert!(out.ends_with(crate::thumbnail::PLACEHOLDER_FILE));
        assert!(out.is_file());
    }
}
