//! Extension to MIME type table for non-image media.

/// Served for files whose type cannot be determined.
pub const OCTET_STREAM: &str = "application/octet-stream";

/// Every type the media firewall should serve with a specific
/// `Content-Type` must be listed here.
const TABLE: &[(&str, &str)] = &[
    ("DOC", "application/msword"),
    ("MOV", "video/quicktime"),
    ("MP3", "audio/mpeg"),
    ("PDF", "application/pdf"),
    ("PPT", "application/vnd.ms-powerpoint"),
    ("RTF", "text/rtf"),
    ("SID", "image/x-mrsid"),
    ("TXT", "text/plain"),
    ("XLS", "application/vnd.ms-excel"),
    ("WMV", "video/x-ms-wmv"),
];

/// Case-insensitive lookup of a bare extension (no dot).
pub fn mime_for_extension(ext: &str) -> Option<&'static str> {
    TABLE
        .iter()
        .find(|(e, _)| e.eq_ignore_ascii_case(ext))
        .map(|(_, mime)| *mime)
}
