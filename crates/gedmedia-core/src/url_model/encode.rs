//! Percent-encoding for media URLs.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS, NON_ALPHANUMERIC};

/// Everything except unreserved characters (RFC 3986), for query values.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Query-value set that keeps `/` so relative paths stay readable.
const PATH: &AsciiSet = &QUERY_VALUE.remove(b'/');

/// Characters that cannot appear raw in a header or JavaScript string URL.
const URL: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'\'')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'\\');

/// Encodes a single query parameter value (tree names, filenames).
pub fn encode_query_value(value: &str) -> String {
    utf8_percent_encode(value, QUERY_VALUE).to_string()
}

/// Encodes a relative media path, keeping directory separators.
pub fn encode_path(path: &str) -> String {
    utf8_percent_encode(path, PATH).to_string()
}

/// Escapes an already-formed URL for raw contexts without touching its
/// structure (`:`, `/`, `?`, `&`, `=` and existing `%` escapes are kept).
pub fn encode_url(url: &str) -> String {
    utf8_percent_encode(url, URL).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_value_escapes_reserved() {
        assert_eq!(encode_query_value("my tree&co"), "my%20tree%26co");
        assert_eq!(encode_query_value("smith-family_1.ged"), "smith-family_1.ged");
        assert_eq!(encode_query_value("a/b"), "a%2Fb");
    }

    #[test]
    fn path_keeps_slashes() {
        assert_eq!(encode_path("media/old photos/é.jpg"), "media/old%20photos/%C3%A9.jpg");
    }

    #[test]
    fn url_keeps_structure() {
        assert_eq!(
            encode_url("http://example.com/a b.jpg?x=1&y=2"),
            "http://example.com/a%20b.jpg?x=1&y=2"
        );
    }
}
