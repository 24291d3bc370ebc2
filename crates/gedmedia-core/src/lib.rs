//! Media file resolution for genealogy records.
//!
//! Given a media record (a picture, document or video linked from a family
//! tree), [`locator::MediaLocator`] works out where its bytes live, whether
//! they sit behind the media firewall, what type they are, and which URL and
//! cache-busting etag a particular viewer should get.

pub mod config;
pub mod error;
pub mod logging;

pub mod access;
pub mod access_url;
pub mod checksum;
pub mod kind;
pub mod locator;
pub mod mime;
pub mod paths;
pub mod record;
pub mod thumbnail;
pub mod url_model;

pub use access::{AccessContext, AccessLevel};
pub use access_url::UrlContext;
pub use config::MediaLocatorConfig;
pub use error::MediaError;
pub use locator::{ExistsState, LocationCache, MediaLocator, ResolvedLocation, Variant};
pub use record::{MediaRecord, TreeRef};
