//! Error type for the media core.

use std::path::PathBuf;

/// Errors raised while building records or producing thumbnails.
///
/// Location probing never returns these: missing or unreadable files are
/// reported through [`crate::locator::ExistsState`] instead.
#[derive(Debug, thiserror::Error)]
pub enum MediaError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("image error on {path}: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// A GEDCOM media block had no `FILE` line.
    #[error("media record {xref} has no FILE")]
    MissingFile { xref: String },

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl MediaError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        MediaError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn image(path: impl Into<PathBuf>, source: image::ImageError) -> Self {
        MediaError::Image {
            path: path.into(),
            source,
        }
    }
}

pub type MediaResult<T> = std::result::Result<T, MediaError>;
