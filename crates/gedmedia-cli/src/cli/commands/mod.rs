//! CLI command handlers. Each command is in its own file.

mod etag;
mod info;
mod locate;
mod mime;
mod url;

pub use etag::run_etag;
pub use info::run_info;
pub use locate::run_locate;
pub use mime::run_mime;
pub use url::run_url;
