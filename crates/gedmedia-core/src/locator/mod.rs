//! Media location resolution.
//!
//! Maps a [`MediaRecord`] and a [`Variant`] to the file that holds its bytes:
//! an external URL, a file under the unprotected media root, or a file under
//! the protected (firewalled) root. Resolution is a single synchronous pass of
//! existence checks and never fails; missing or unreadable files come back as
//! [`ExistsState::NotFound`].
//!
//! Only [`MediaLocator::locate`] (and `locate_with(.., true)`) generates
//! missing thumbnails. The size, time, etag, type and URL accessors resolve
//! without touching the disk beyond existence checks.

mod cache;
mod state;

use std::fs;
use std::path::Path;

use crate::access::AccessContext;
use crate::checksum::{etag, EtagInput};
use crate::config::MediaLocatorConfig;
use crate::mime::{
    info_from_extension, mime_for_extension, sniff_image, DiagnosticSink, MediaInfo, TracingSink,
};
use crate::paths::{media_relative_path, thumbnail_relative_path, web_path};
use crate::record::MediaRecord;
use crate::thumbnail::{ImageThumbnailGenerator, ThumbnailGenerator};
use crate::url_model::{SchemeDetector, UrlDetector};

pub use cache::LocationCache;
pub use state::{format_size_kb, ExistsState, ResolvedLocation, Variant};

pub struct MediaLocator {
    config: MediaLocatorConfig,
    detector: Box<dyn UrlDetector>,
    thumbnails: Box<dyn ThumbnailGenerator>,
    diagnostics: Box<dyn DiagnosticSink>,
}

impl std::fmt::Debug for MediaLocator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MediaLocator")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

fn is_file(path: &Path) -> bool {
    fs::metadata(path).map(|m| m.is_file()).unwrap_or(false)
}

impl MediaLocator {
    /// Locator with the default URL detector, `image`-backed thumbnails and
    /// `tracing` diagnostics.
    pub fn new(config: MediaLocatorConfig) -> Self {
        let thumbnails =
            ImageThumbnailGenerator::new(config.thumbnail_max_width, config.cache_dir());
        Self {
            config,
            detector: Box::new(SchemeDetector),
            thumbnails: Box::new(thumbnails),
            diagnostics: Box::new(TracingSink),
        }
    }

    pub fn with_detector(mut self, detector: impl UrlDetector + 'static) -> Self {
        self.detector = Box::new(detector);
        self
    }

    pub fn with_thumbnail_generator(mut self, generator: impl ThumbnailGenerator + 'static) -> Self {
        self.thumbnails = Box::new(generator);
        self
    }

    pub fn with_diagnostics(mut self, sink: impl DiagnosticSink + 'static) -> Self {
        self.diagnostics = Box::new(sink);
        self
    }

    pub fn config(&self) -> &MediaLocatorConfig {
        &self.config
    }

    /// True when the record's filename is an external URL.
    pub fn is_external(&self, record: &MediaRecord) -> bool {
        self.detector.is_external(record.filename())
    }

    /// Resolves a variant, generating a missing thumbnail if possible.
    pub fn locate(&self, record: &MediaRecord, variant: Variant) -> ResolvedLocation {
        self.locate_with(record, variant, true)
    }

    /// Resolves a variant. With `generate = false` a missing thumbnail
    /// resolves straight to the placeholder.
    pub fn locate_with(
        &self,
        record: &MediaRecord,
        variant: Variant,
        generate: bool,
    ) -> ResolvedLocation {
        if self.is_external(record) {
            return ResolvedLocation::external(variant, record.filename());
        }
        let relative = media_relative_path(record.filename(), self.config.media_directory_levels);
        match variant {
            Variant::Main => self.probe(Variant::Main, &relative),
            Variant::Thumb => self.locate_thumb(&relative, generate),
        }
    }

    /// Resolution used by the read-only accessors: never generates.
    fn resolve(&self, record: &MediaRecord, variant: Variant) -> ResolvedLocation {
        self.locate_with(record, variant, false)
    }

    /// Checks the unprotected root first, then the protected root.
    fn probe(&self, variant: Variant, relative: &Path) -> ResolvedLocation {
        let unprotected = self.config.unprotected_root.join(relative);
        let (exists, server_path) = if relative.as_os_str().is_empty() {
            (ExistsState::NotFound, unprotected)
        } else if is_file(&unprotected) {
            (ExistsState::FoundUnprotected, unprotected)
        } else {
            let protected = self.config.protected_root.join(relative);
            if is_file(&protected) {
                (ExistsState::FoundProtected, protected)
            } else {
                (ExistsState::NotFound, unprotected)
            }
        };
        tracing::trace!(
            variant = variant.as_str(),
            ?exists,
            path = %server_path.display(),
            "probed media file"
        );
        ResolvedLocation {
            variant,
            exists,
            server_path,
            web_path: web_path(&self.config.media_url_prefix, relative),
            is_external: false,
        }
    }

    fn locate_thumb(&self, relative: &Path, generate: bool) -> ResolvedLocation {
        if relative.as_os_str().is_empty() {
            return self.placeholder_location();
        }
        let thumb_relative = thumbnail_relative_path(relative);
        let cached = self.probe(Variant::Thumb, &thumb_relative);
        if cached.exists.is_found() {
            return cached;
        }
        if !generate {
            return self.placeholder_location();
        }

        let main = self.probe(Variant::Main, relative);
        let root = match main.exists {
            ExistsState::NotFound => return self.placeholder_location(),
            ExistsState::FoundUnprotected => &self.config.unprotected_root,
            ExistsState::FoundProtected => &self.config.protected_root,
        };
        let target = root.join(&thumb_relative);
        let produced = self.thumbnails.generate(&main.server_path, &target);
        if produced == target && is_file(&target) {
            ResolvedLocation {
                variant: Variant::Thumb,
                exists: main.exists,
                server_path: target,
                web_path: cached.web_path,
                is_external: false,
            }
        } else {
            self.placeholder_location()
        }
    }

    fn placeholder_location(&self) -> ResolvedLocation {
        let path = self.thumbnails.placeholder();
        let exists = if is_file(&path) {
            ExistsState::FoundUnprotected
        } else {
            ExistsState::NotFound
        };
        ResolvedLocation {
            variant: Variant::Thumb,
            exists,
            server_path: path,
            web_path: self.config.placeholder_url.clone(),
            is_external: false,
        }
    }

    /// File size in bytes; 0 when the file is missing, external or unreadable.
    pub fn size_in_bytes(&self, record: &MediaRecord, variant: Variant) -> u64 {
        self.resolve(record, variant).size_in_bytes()
    }

    /// File size in kilobytes, formatted for display.
    pub fn size_label(&self, record: &MediaRecord, variant: Variant) -> String {
        self.resolve(record, variant).size_label()
    }

    /// Modification time (Unix seconds); 0 on any failure.
    pub fn modified_time(&self, record: &MediaRecord, variant: Variant) -> i64 {
        self.resolve(record, variant).modified_time()
    }

    /// Cache-busting token for a record as seen by `access`. Empty for
    /// external media.
    pub fn compute_etag(
        &self,
        record: &MediaRecord,
        variant: Variant,
        access: &AccessContext,
    ) -> String {
        if self.is_external(record) {
            return String::new();
        }
        self.etag_for(&self.resolve(record, variant), access)
    }

    /// Etag of an already resolved location.
    pub fn etag_for(&self, location: &ResolvedLocation, access: &AccessContext) -> String {
        if location.is_external {
            return String::new();
        }
        let basename = location.basename();
        etag(&EtagInput {
            basename: &basename,
            modified: location.modified_time(),
            tree_name: &access.tree_name,
            access_level: access.access_level,
            suppress_watermark: self.config.suppress_watermark,
        })
    }

    pub fn resolve_mime_type(&self, record: &MediaRecord, variant: Variant) -> MediaInfo {
        self.mime_for(record, &self.resolve(record, variant))
    }

    /// Type of an already resolved location. Warns through the diagnostic
    /// sink when an existing file has an unknown type.
    pub fn mime_for(&self, record: &MediaRecord, location: &ResolvedLocation) -> MediaInfo {
        let found = !location.is_external && location.exists.is_found();
        if found {
            if let Some(info) = sniff_image(&location.server_path) {
                return info;
            }
        }
        let info = info_from_extension(record.filename());
        if found && mime_for_extension(&info.ext).is_none() {
            self.diagnostics.unknown_mime(record.filename());
        }
        info
    }
}
