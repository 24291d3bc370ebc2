//! External media detection.

/// Decides whether a media filename refers to an external resource.
///
/// The locator never probes the filesystem for filenames this accepts.
pub trait UrlDetector: Send + Sync {
    fn is_external(&self, filename: &str) -> bool;
}

/// Treats any absolute URL with an authority (`scheme://host/...`) as external.
///
/// Relative paths, Windows drive paths (`C:\photos\a.jpg`) and opaque URIs
/// such as `mailto:` stay local.
#[derive(Debug, Clone, Copy, Default)]
pub struct SchemeDetector;

impl UrlDetector for SchemeDetector {
    fn is_external(&self, filename: &str) -> bool {
        let trimmed = filename.trim();
        if !trimmed.contains("://") {
            return false;
        }
        match url::Url::parse(trimmed) {
            Ok(parsed) => !parsed.cannot_be_a_base() && parsed.has_host(),
            Err(_) => false,
        }
    }
}

impl<F> UrlDetector for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn is_external(&self, filename: &str) -> bool {
        self(filename)
    }
}

/// Google Street View embeds are external URLs on a `maps.google.*` host.
pub fn is_street_view(filename: &str) -> bool {
    url::Url::parse(filename.trim())
        .ok()
        .and_then(|u| u.host_str().map(|h| h.starts_with("maps.google.")))
        .unwrap_or(false)
}
