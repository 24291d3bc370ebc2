//! Direct URLs to media files.
//!
//! Files in the protected root are only reachable through the media firewall
//! gateway; everything else is linked directly. The gateway URL shapes are
//! relied on by existing pages and bookmarks and must not change:
//!
//! - `mediafirewall?mid=<xref>[&thumb=1][&dl=1]&ged=<tree>&cb=<etag>`
//! - `mediafirewall?filename=<path>[&dl=1]&cb=<etag>` (no owning tree)

use crate::access::AccessContext;
use crate::locator::{ExistsState, MediaLocator, ResolvedLocation, Variant};
use crate::record::MediaRecord;
use crate::url_model::{encode_path, encode_query_value, encode_url};

/// Path of the media firewall gateway, relative to the site root.
pub const GATEWAY: &str = "mediafirewall";

/// Page showing a single media record.
pub const VIEWER: &str = "mediaviewer";

/// Where the URL will be emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlContext {
    /// HTML attribute: parameters separated by `&amp;`, paths left as-is.
    Html,
    /// HTTP headers and JavaScript strings: `&` separators, escaped paths.
    Raw,
}

impl UrlContext {
    pub fn separator(self) -> &'static str {
        match self {
            UrlContext::Html => "&amp;",
            UrlContext::Raw => "&",
        }
    }
}

impl MediaRecord {
    /// Link to the record's viewer page (not to the file itself).
    pub fn viewer_url(&self, context: UrlContext) -> String {
        let mut url = format!("{VIEWER}?mid={}", encode_query_value(self.xref()));
        if let Some(tree) = self.tree() {
            url.push_str(context.separator());
            url.push_str("ged=");
            url.push_str(&encode_query_value(&tree.name));
        }
        url
    }
}

impl MediaLocator {
    /// URL of the file behind `record`. Never generates a thumbnail; a
    /// missing one links to the placeholder.
    pub fn build_access_url(
        &self,
        record: &MediaRecord,
        variant: Variant,
        download: bool,
        access: &AccessContext,
        context: UrlContext,
    ) -> String {
        let location = self.locate_with(record, variant, false);
        self.access_url_for(record, &location, download, access, context)
    }

    /// URL for an already resolved location.
    pub fn access_url_for(
        &self,
        record: &MediaRecord,
        location: &ResolvedLocation,
        download: bool,
        access: &AccessContext,
        context: UrlContext,
    ) -> String {
        if location.is_external {
            return match context {
                UrlContext::Html => record.filename().to_string(),
                UrlContext::Raw => encode_url(record.filename()),
            };
        }

        let path = location.web_path.as_str();
        if location.exists != ExistsState::FoundProtected {
            return match context {
                UrlContext::Html => path.to_string(),
                UrlContext::Raw => encode_path(path),
            };
        }

        let sep = context.separator();
        let cb = self.etag_for(location, access);
        let dl = if download {
            format!("{sep}dl=1")
        } else {
            String::new()
        };
        match record.tree() {
            Some(tree) => {
                let thumb = if location.variant == Variant::Thumb {
                    format!("{sep}thumb=1")
                } else {
                    String::new()
                };
                format!(
                    "{GATEWAY}?mid={}{thumb}{dl}{sep}ged={}{sep}cb={cb}",
                    encode_query_value(record.xref()),
                    encode_query_value(&tree.name),
                )
            }
            None => format!("{GATEWAY}?filename={}{dl}{sep}cb={cb}", encode_path(path)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::TreeRef;

    #[test]
    fn separators() {
        assert_eq!(UrlContext::Html.separator(), "&amp;");
        assert_eq!(UrlContext::Raw.separator(), "&");
    }

    #[test]
    fn viewer_links() {
        let record = MediaRecord::new("M7", "a.jpg").with_tree(TreeRef::new(3, "van der Berg"));
        assert_eq!(
            record.viewer_url(UrlContext::Html),
            "mediaviewer?mid=M7&amp;ged=van%20der%20Berg"
        );
        assert_eq!(
            record.viewer_url(UrlContext::Raw),
            "mediaviewer?mid=M7&ged=van%20der%20Berg"
        );
        assert_eq!(
            MediaRecord::new("M8", "b.jpg").viewer_url(UrlContext::Raw),
            "mediaviewer?mid=M8"
        );
    }
}
