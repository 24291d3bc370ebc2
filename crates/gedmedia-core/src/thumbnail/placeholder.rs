//! Built-in placeholder thumbnail.

use image::{ImageBuffer, Rgb};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{MediaError, MediaResult};

pub const PLACEHOLDER_FILE: &str = "placeholder.png";

const SIZE: u32 = 48;
const BACKGROUND: Rgb<u8> = Rgb([0xdd, 0xdd, 0xdd]);
const FRAME: Rgb<u8> = Rgb([0x99, 0x99, 0x99]);

/// Writes the placeholder PNG into `dir` unless it is already there.
pub fn ensure_placeholder(dir: &Path) -> MediaResult<PathBuf> {
    let path = dir.join(PLACEHOLDER_FILE);
    if path.is_file() {
        return Ok(path);
    }
    fs::create_dir_all(dir).map_err(|e| MediaError::io(dir, e))?;

    let img = ImageBuffer::from_fn(SIZE, SIZE, |x, y| {
        let edge = x < 2 || y < 2 || x >= SIZE - 2 || y >= SIZE - 2;
        let diagonal = x == y || x + y == SIZE - 1;
        if edge || diagonal {
            FRAME
        } else {
            BACKGROUND
        }
    });
    img.save(&path).map_err(|e| MediaError::image(&path, e))?;
    tracing::debug!("wrote placeholder thumbnail {}", path.display());
    Ok(path)
}
