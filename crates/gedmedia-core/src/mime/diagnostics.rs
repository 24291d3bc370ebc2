//! Diagnostics raised while resolving media.

/// Receives warning-class events from the locator. Implementations must not
/// block or fail.
pub trait DiagnosticSink: Send + Sync {
    /// An existing file has a type the media firewall cannot serve correctly.
    fn unknown_mime(&self, filename: &str);
}

/// Forwards diagnostics to `tracing` under the `gedmedia::firewall` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn unknown_mime(&self, filename: &str) {
        tracing::warn!(
            target: "gedmedia::firewall",
            file = %filename,
            "media firewall error: unknown mime type"
        );
    }
}
