//! bookmarks-extract: Browser bookmark exports as structured records
//!
//! Pipeline:
//! - repair: close the `<DT>`/`<DD>` lines exporters leave open
//! - extract: walk every link and recover title, note, URL metadata and folders
//! - convert: repair + parse + extract in one call

pub mod convert;
pub mod dom;
pub mod extract;
pub mod links;
pub mod output;
pub mod repair;
pub mod schema;

pub use convert::parse_bookmarks;
pub use extract::{extract_bookmarks, folders_of};
pub use links::{extract_domain, is_valid_url};
pub use output::{render, OutputError, OutputFormat};
pub use repair::repair_markup;
pub use schema::{Attributes, BookmarkRecord, FolderRef};
