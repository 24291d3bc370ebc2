//! URL modeling for media filenames.
//!
//! Decides whether a media filename points at an external resource and
//! escapes filenames and query values for the contexts URLs are emitted in.

mod encode;
mod external;

pub use encode::{encode_path, encode_query_value, encode_url};
pub use external::{is_street_view, SchemeDetector, UrlDetector};
